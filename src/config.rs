//! Shared configuration loader for hebnum.
//!
//! `defaults/hebnum.default.toml` is embedded into the binary so that the
//! documented defaults and the runtime behavior stay in sync. The CLI layers
//! user files, environment variables and flags on top of those defaults via
//! [`Loader`] before deserializing into [`HebnumConfig`].

use std::path::Path;

use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map, ValueKind,
    builder::DefaultState,
};
use serde::Deserialize;

const DEFAULT_TOML: &str = include_str!("../defaults/hebnum.default.toml");

/// Prefix of environment variables read by [`Loader::with_env`].
pub const ENV_PREFIX: &str = "HEBNUM";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HebnumConfig {
    pub output:  OutputConfig,
    pub input:   InputConfig,
    pub logging: LoggingConfig,
}

/// How conversion results are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Render each converted value back into Hebrew words.
    pub words:  bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Longest phrase, in characters, accepted for conversion.
    pub max_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A `tracing` filter directive such as `warn` or `hebnum=debug`.
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One value (or error) per line.
    Plain,
    /// One JSON object per line.
    Json,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    #[must_use]
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    #[must_use]
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `HEBNUM_<SECTION>__<KEY>` variables from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_source(None)
    }

    /// Layer environment-style variables from `vars` instead of the process
    /// environment, or from the process environment when `vars` is `None`.
    #[must_use]
    pub fn with_env_source(mut self, vars: Option<Map<String, String>>) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX).prefix_separator("_")
                                                         .separator("__")
                                                         .try_parsing(true)
                                                         .source(vars);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
        where I: Into<ValueKind>
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<HebnumConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HebnumConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.format, OutputFormat::Plain);
        assert!(!config.output.words);
        assert_eq!(config.input.max_chars, 4096);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new().set_override("output.format", "json")
                                  .expect("override to apply")
                                  .set_override("output.words", true)
                                  .expect("override to apply")
                                  .build()
                                  .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.words);
    }

    #[test]
    fn reads_environment_variables() {
        let vars = Map::from([("HEBNUM_INPUT__MAX_CHARS".to_string(), "12".to_string()),
                              ("HEBNUM_LOGGING__LEVEL".to_string(), "debug".to_string()),
                              ("OTHER_OUTPUT__FORMAT".to_string(), "json".to_string())]);
        let config = Loader::new().with_env_source(Some(vars))
                                  .build()
                                  .expect("config to build");
        assert_eq!(config.input.max_chars, 12);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Plain);
    }

    #[test]
    fn files_layer_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir to be created");
        let path = dir.path().join("hebnum.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").expect("temp file to be writable");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.words);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new().with_optional_file("does-not-exist/hebnum.toml")
                                  .build()
                                  .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Plain);
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new().with_file("does-not-exist/hebnum.toml").build().is_err());
    }

    #[test]
    fn unknown_output_format_fails() {
        let result = Loader::new().set_override("output.format", "yaml")
                                  .expect("override to apply")
                                  .build();
        assert!(result.is_err());
    }
}
