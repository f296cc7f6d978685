use crate::{
    error::GrammarError,
    interpreter::parser::{
        core::ParseResult,
        term::{Lexeme, Term},
    },
    lexicon::{DOUBLED_UNITS, THOUSANDS},
};

/// Rejects ill-formed phrases before the main scan.
///
/// Checks, over the whole lexeme list:
/// - a `.` may only appear inside a numeral literal;
/// - a tens word may not be followed by another tens word, directly or through
///   a separate "ו" ("שמונים ושבעים");
/// - a tens word may not be followed by the doubled plural "two thousand"
///   ("חמישים אלפיים").
///
/// # Errors
/// `MisplacedPoint`, `ConsecutiveTens` or `MalformedMagnitude`.
pub(super) fn check(lexemes: &[Lexeme]) -> ParseResult<()> {
    if let Some(lexeme) = lexemes.iter()
                                 .find(|l| l.text.contains('.') && !matches!(l.term, Term::Numeral(_)))
    {
        return Err(GrammarError::MisplacedPoint { token:    lexeme.text.clone(),
                                                  position: lexeme.position, });
    }

    for (index, lexeme) in lexemes.iter().enumerate() {
        if !lexeme.is_tens() {
            continue;
        }

        let mut next = index + 1;
        if lexemes.get(next).is_some_and(|l| l.term == Term::Conjunction) {
            next += 1;
        }
        if let Some(other) = lexemes.get(next)
           && other.is_tens()
        {
            return Err(GrammarError::ConsecutiveTens { first:    lexeme.text.clone(),
                                                       second:   other.text.clone(),
                                                       position: lexeme.position, });
        }

        if let (Some(unit), Some(scale)) = (lexemes.get(index + 1), lexemes.get(index + 2))
           && DOUBLED_UNITS.contains(&unit.text.as_str())
           && scale.text == THOUSANDS
        {
            return Err(GrammarError::MalformedMagnitude { token:    lexeme.text.clone(),
                                                          position: lexeme.position, });
        }
    }

    Ok(())
}
