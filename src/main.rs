use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use hebnum::{
    config::{HebnumConfig, Loader, OutputFormat},
    format,
    response::Response,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Configuration file read from the working directory when present.
const LOCAL_CONFIG: &str = "hebnum.toml";

/// hebnum converts Hebrew numeral phrases such as "מיליון וחצי" into numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the contents as the path of a file with one phrase per line.
    #[arg(short, long)]
    file: bool,

    /// Also renders each converted value back into Hebrew words.
    #[arg(short, long)]
    words: bool,

    /// Prints one JSON object per phrase.
    #[arg(short, long)]
    json: bool,

    /// Treats the contents as a number and prints it in Hebrew words.
    #[arg(short, long, conflicts_with = "file")]
    to_words: bool,

    /// Layers a configuration file over the defaults and ./hebnum.toml.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// A phrase, a file path with `--file`, or a number with `--to-words`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_logging(&config.logging.level);
    debug!(?config, "configuration loaded");

    if args.to_words {
        let value: f64 = args.contents
                             .trim()
                             .parse()
                             .with_context(|| format!("'{}' is not a number", args.contents))?;
        println!("{}", format(value));
        return Ok(ExitCode::SUCCESS);
    }

    let phrases = if args.file {
        let text = fs::read_to_string(&args.contents).with_context(|| {
                                                         format!("Failed to read the input file \
                                                                  '{}'. Perhaps this file does \
                                                                  not exist?",
                                                                 args.contents)
                                                     })?;
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        vec![args.contents]
    };
    info!(count = phrases.len(), "converting phrases");

    let mut failed = false;
    for phrase in &phrases {
        let response = respond(phrase, &config);
        failed |= response.is_failure();
        print_response(&response, config.output.format)?;
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Layers, in order: embedded defaults, `./hebnum.toml`, `--config`, the
/// environment, then command-line flags.
fn load_config(args: &Args) -> Result<HebnumConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = &args.config {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();
    if args.json {
        loader = loader.set_override("output.format", "json")?;
    }
    if args.words {
        loader = loader.set_override("output.words", true)?;
    }
    loader.build().context("Failed to load configuration")
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `logging.level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn respond(phrase: &str, config: &HebnumConfig) -> Response {
    let max_chars = config.input.max_chars;
    if phrase.chars().count() > max_chars {
        return Response::Failed { error: format!("Input is longer than {max_chars} characters.") };
    }
    Response::from_text(phrase, config.output.words)
}

fn print_response(response: &Response, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(response)?);
        },
        OutputFormat::Plain => match response {
            Response::Converted { number,
                                  hebrew: Some(hebrew), } => println!("{number}\t{hebrew}"),
            Response::Converted { number, hebrew: None } => println!("{number}"),
            Response::Failed { error } => eprintln!("{error}"),
        },
    }
    Ok(())
}
