//! # hebnum
//!
//! hebnum converts Hebrew numeral phrases such as "מיליון וחצי" into numbers,
//! and renders numbers back into Hebrew words on a best-effort basis.
//! Conversion enforces the numeral grammar: scale words must strictly
//! decrease, a fraction word is used at most once, and each segment between
//! scale words holds at most one tens word.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{lexer::tokenize, parser::core::parse, parser::term::classify};

/// Layered runtime configuration.
///
/// This module merges the embedded defaults with optional configuration files,
/// environment variables and command-line overrides into a single typed
/// [`config::HebnumConfig`].
///
/// # Responsibilities
/// - Embeds `defaults/hebnum.default.toml` so the documented defaults and the
///   runtime behavior cannot drift apart.
/// - Layers user sources in a fixed order, later sources winning.
pub mod config;
/// Provides the error type raised by conversion.
///
/// This module defines every way a numeral phrase can be rejected. Errors carry
/// the offending word and its position so the caller can point at it.
///
/// # Responsibilities
/// - Defines one variant per grammar violation.
/// - Attaches word positions and the offending text for user feedback.
/// - Integrates with standard error handling through `thiserror`.
pub mod error;
/// Renders numbers as Hebrew words.
///
/// The inverse of conversion, meant for display only. It covers the common
/// forms and makes no promise that its output parses back to the same value.
pub mod formatter;
/// Orchestrates the conversion of a phrase.
///
/// This module ties together the lexer and the parser. The lexer splits text
/// into words; the parser classifies them and accumulates the numeric value.
///
/// # Responsibilities
/// - Coordinates tokenization, classification and the grammar scan.
/// - Manages the flow of words and errors between phases.
pub mod interpreter;
/// Static vocabulary of Hebrew numeral words.
///
/// This module holds the word tables for units, tens, hundreds, scales and
/// fractions, built once from synonym groups and shared read-only by every
/// conversion.
pub mod lexicon;
/// Presentation-facing conversion results.
///
/// A serializable shape for a conversion outcome, used by the command-line
/// interface for its JSON output.
pub mod response;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert `f64` values to integers without silent data loss.
/// - Split a value into its whole part and fractional digits.
pub mod util;

pub use error::GrammarError;
pub use formatter::format;

/// Converts a Hebrew numeral phrase into its numeric value.
///
/// The phrase is split into words, each word is classified, and the grammar
/// scan accumulates the total. An empty phrase is zero.
///
/// # Errors
/// Returns the first [`GrammarError`] found, for example an unknown word, a
/// scale word that does not decrease, or a fraction used twice.
///
/// # Examples
/// ```
/// use hebnum::{GrammarError, convert};
///
/// assert_eq!(convert("אלף מאתיים שלושים וארבע"), Ok(1234.0));
/// assert_eq!(convert("מיליון וחצי"), Ok(1_500_000.0));
/// assert_eq!(convert("2.5 מיליארד"), Ok(2_500_000_000.0));
/// assert_eq!(convert(""), Ok(0.0));
///
/// // Scale words must strictly decrease.
/// assert!(matches!(convert("מיליון מיליון"), Err(GrammarError::ScaleOrder { .. })));
/// ```
pub fn convert(text: &str) -> Result<f64, GrammarError> {
    debug!(text, "converting phrase");
    let words = tokenize(text);
    let lexemes = classify(&words);
    let result = parse(&lexemes);
    match &result {
        Ok(value) => debug!(value, "converted phrase"),
        Err(e) => debug!(error = %e, "rejected phrase"),
    }
    result
}
