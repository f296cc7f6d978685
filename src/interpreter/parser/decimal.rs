use crate::{
    error::GrammarError,
    interpreter::parser::{
        core::ParseResult,
        term::{Lexeme, Term},
    },
    lexicon::Scale,
};

/// Returns how many lexemes at the start of `lexemes` form a decimal digit
/// phrase.
///
/// A phrase may contain integral numerals, unit, tens and hundreds words and
/// the thousand scale. It ends at the first other lexeme; in particular a
/// separate "ו", million and billion all terminate it.
pub(super) fn phrase_len(lexemes: &[Lexeme]) -> usize {
    lexemes.iter()
           .take_while(|lexeme| match lexeme.term {
               Term::Unit(_) | Term::Tens(_) | Term::Hundreds(_) | Term::Scale(Scale::Thousand) => {
                   true
               },
               Term::Numeral(_) => lexeme.is_integral_numeral(),
               _ => false,
           })
           .count()
}

/// Interprets a digit phrase as the digits that follow a decimal point.
///
/// Without tens, hundreds or thousand the phrase is read digit by digit
/// ("אפס שבע" is `07`). Otherwise it is evaluated as a number ("שבע מאות
/// ושבע" is `707`); a leading zero word keeps one leading zero.
///
/// # Errors
/// `LiteralTooLarge` if the evaluated phrase is not finite.
pub(super) fn digits(phrase: &[Lexeme]) -> ParseResult<String> {
    let has_magnitude = phrase.iter().any(|lexeme| {
                                          matches!(lexeme.term,
                                                   Term::Tens(_)
                                                   | Term::Hundreds(_)
                                                   | Term::Scale(Scale::Thousand))
                                      });

    if !has_magnitude {
        let mut digits = String::new();
        for lexeme in phrase {
            match lexeme.term {
                Term::Unit(value) => digits.extend(char::from_digit(value, 10)),
                Term::Numeral(_) => digits.push_str(&lexeme.text),
                _ => break,
            }
        }
        if digits.is_empty() {
            digits.push('0');
        }
        return Ok(digits);
    }

    let value = magnitude(phrase);
    if !value.is_finite()
       && let Some(last) = phrase.last()
    {
        return Err(GrammarError::LiteralTooLarge { token:    last.text.clone(),
                                                   position: last.position, });
    }
    if value <= 0.0 {
        return Ok("0".to_string());
    }
    let leading_zero = phrase.first().is_some_and(|lexeme| match lexeme.term {
                                         Term::Unit(0) => true,
                                         Term::Numeral(_) => lexeme.text.starts_with('0'),
                                         _ => false,
                                     });
    Ok(if leading_zero { format!("0{value}") } else { value.to_string() })
}

/// Evaluates a digit phrase that contains tens, hundreds or thousand.
///
/// Hundreds, tens and units add to the group; an integral numeral shifts the
/// group left by its digit count; thousand multiplies everything before it.
fn magnitude(phrase: &[Lexeme]) -> f64 {
    let mut value: f64 = 0.0;
    let mut group = 0.0;

    for lexeme in phrase {
        match lexeme.term {
            Term::Unit(v) | Term::Tens(v) | Term::Hundreds(v) => group += f64::from(v),
            Term::Numeral(literal) => {
                let width = i32::try_from(lexeme.text.len()).unwrap_or(i32::MAX);
                group = group.mul_add(10f64.powi(width), literal);
            },
            Term::Scale(scale) => {
                let factor = scale.factor();
                value = value.mul_add(factor, group.max(1.0) * factor);
                group = 0.0;
            },
            _ => break,
        }
    }

    value + group
}

/// Converts a digit string into the value it has after a decimal point.
pub(super) fn fraction_value(digits: &str, point: &Lexeme) -> ParseResult<f64> {
    format!("0.{digits}").parse()
                         .map_err(|_| GrammarError::LiteralTooLarge { token:    digits.to_string(),
                                                                      position: point.position, })
}
