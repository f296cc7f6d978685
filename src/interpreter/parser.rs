/// Parse driver.
///
/// The state machine that walks classified lexemes left to right, enforcing
/// scale order and fraction and tens limits, and produces the final value.
pub mod core;

/// Running parse state.
///
/// Holds the current group, committed scale groups and the per-expression and
/// per-segment flags.
pub mod accumulator;

/// Decimal digit phrases.
///
/// Finds and interprets the phrase that follows a decimal point word.
pub mod decimal;

/// Strictness pre-scan.
///
/// Rejects ill-formed sequences over the whole phrase before scanning.
pub mod strictness;

/// Word classification.
///
/// Tags every word with its grammatical role and merges two-word hundreds.
pub mod term;
