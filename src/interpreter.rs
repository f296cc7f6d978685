/// The lexer module splits a phrase into words.
///
/// The lexer reads the raw text and produces a sequence of words, each with the
/// conjunctive prefix stripped and flagged, and with the plural "two thousand"
/// expanded into two words. This is the first stage of conversion.
///
/// # Responsibilities
/// - Separates words on whitespace and the maqaf.
/// - Strips and records the conjunctive prefix `ו`.
/// - Tracks the source position of every word for error reporting.
pub mod lexer;
/// The parser module turns words into a number.
///
/// The parser classifies each word, checks the phrase for ill-formed
/// sequences, and then scans it once, accumulating groups under scale words.
///
/// # Responsibilities
/// - Recognizes hundreds, tens, units, scales, fractions, numerals and decimal
///   phrases.
/// - Enforces strictly descending scales, a single fraction per expression and
///   a single tens word per segment.
/// - Reports the first violation with the offending word and its position.
pub mod parser;
