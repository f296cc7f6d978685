//! Best-effort rendering of numbers as Hebrew words.
//!
//! The output is meant for display. It does not cover every grammatical form
//! (gender agreement, construct states such as "שלושת אלפים") and is not
//! guaranteed to parse back into the same value.

use crate::{
    lexicon::{self, CONJUNCTIVE_PREFIX, MINUS, POINT, Scale, TWO_THOUSAND},
    util::num::split_decimal,
};

/// Renders `value` as Hebrew words.
///
/// The integer part is grouped into billions, millions, thousands and the
/// remainder; a fractional part follows as "נקודה" and one word per digit.
/// Negative values start with "מינוס". Values that cannot be split exactly
/// (non-finite, or beyond 2^53) fall back to their numeric rendering.
///
/// # Example
/// ```
/// use hebnum::format;
///
/// assert_eq!(format(1_500_000.0), "מיליון חמש מאות אלף");
/// assert_eq!(format(3.25), "שלוש נקודה שתיים חמש");
/// assert_eq!(format(-7.0), "מינוס שבע");
/// ```
#[must_use]
pub fn format(value: f64) -> String {
    let Some((whole, digits)) = split_decimal(value.abs()) else {
        return value.to_string();
    };

    let mut words = Vec::new();
    if value < 0.0 {
        words.push(MINUS.to_string());
    }

    let billions = whole / Scale::Billion.multiplier();
    let millions = whole % Scale::Billion.multiplier() / Scale::Million.multiplier();
    let thousands = whole % Scale::Million.multiplier() / Scale::Thousand.multiplier();
    let rest = whole % Scale::Thousand.multiplier();

    push_scaled(&mut words, billions, Scale::Billion);
    push_scaled(&mut words, millions, Scale::Million);
    if thousands == 2 {
        words.push(TWO_THOUSAND.to_string());
    } else {
        push_scaled(&mut words, thousands, Scale::Thousand);
    }
    words.extend(below_thousand(rest));

    if whole == 0 {
        words.extend(lexicon::unit_word(0).map(str::to_string));
    }

    if !digits.is_empty() {
        words.push(POINT.to_string());
        words.extend(digits.chars()
                           .filter_map(|c| c.to_digit(10))
                           .filter_map(lexicon::unit_word)
                           .map(str::to_string));
    }

    words.join(" ")
}

/// Appends `amount` followed by the scale word; an amount of one is the bare
/// scale word.
fn push_scaled(words: &mut Vec<String>, amount: u64, scale: Scale) {
    match amount {
        0 => {},
        1 => words.push(scale.word().to_string()),
        2..=999 => {
            words.extend(below_thousand(amount));
            words.push(scale.word().to_string());
        },
        _ => {
            words.push(amount.to_string());
            words.push(scale.word().to_string());
        },
    }
}

/// Words for 1..=999, with the conjunctive prefix on the last part when there
/// is more than one. A teen ("שש עשרה") and a two-word hundreds count as one
/// part. Zero yields no words.
fn below_thousand(amount: u64) -> Vec<String> {
    let Ok(amount) = u32::try_from(amount) else {
        return vec![amount.to_string()];
    };
    let hundreds = amount / 100 * 100;
    let tens = amount % 100 / 10 * 10;
    let units = amount % 10;

    let mut words: Vec<String> = Vec::new();
    words.extend(lexicon::hundreds_word(hundreds).map(str::to_string));
    if tens == 10 && units > 0 {
        // Teens put the unit first: "שלוש עשרה".
        words.extend(lexicon::unit_word(units).map(|unit| format!("{unit} עשרה")));
    } else {
        words.extend(lexicon::tens_word(tens).map(str::to_string));
        if units > 0 {
            words.extend(lexicon::unit_word(units).map(str::to_string));
        }
    }

    if words.len() > 1
       && let Some(last) = words.last_mut()
    {
        last.insert(0, CONJUNCTIVE_PREFIX);
    }
    words
}
