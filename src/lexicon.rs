use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The decimal point word, "נקודה".
pub const POINT: &str = "נקודה";
/// The conjunctive prefix letter ("and"), attached to the front of a word.
pub const CONJUNCTIVE_PREFIX: char = 'ו';
/// The conjunctive prefix written as a separate particle word.
pub const CONJUNCTION: &str = "ו";
/// The plural "two thousand". Never looked up directly: the tokenizer expands
/// it into [`TWO_THOUSAND_EXPANSION`].
pub const TWO_THOUSAND: &str = "אלפיים";
/// The tokens [`TWO_THOUSAND`] is expanded into.
pub const TWO_THOUSAND_EXPANSION: [&str; 2] = ["שניים", "אלפים"];
/// The plural spelling of "thousand".
pub const THOUSANDS: &str = "אלפים";
/// Unit forms of "two" that combine into the doubled plural "two thousand".
pub const DOUBLED_UNITS: &[&str] = &["שניים", "שתיים", "שני"];
/// Prefix used by the formatter for negative values.
pub const MINUS: &str = "מינוס";

/// Unit words, canonical spelling first.
const UNIT_GROUPS: &[(u32, &[&str])] = &[(0, &["אפס"]),
                                         (1, &["אחד", "אחת"]),
                                         (2, &["שתיים", "שניים", "שתי", "שני"]),
                                         (3, &["שלוש", "שלושה"]),
                                         (4, &["ארבע", "ארבעה"]),
                                         (5, &["חמש", "חמישה"]),
                                         (6, &["שש", "שישה"]),
                                         (7, &["שבע", "שבעה"]),
                                         (8, &["שמונה"]),
                                         (9, &["תשע", "תשעה"])];

const TEN_GROUPS: &[(u32, &[&str])] = &[(10, &["עשר", "עשרה"]),
                                        (20, &["עשרים"]),
                                        (30, &["שלושים", "שלשים"]),
                                        (40, &["ארבעים"]),
                                        (50, &["חמישים"]),
                                        (60, &["שישים"]),
                                        (70, &["שבעים"]),
                                        (80, &["שמונים"]),
                                        (90, &["תשעים"])];

/// Hundreds; compound keys hold both words separated by one space.
const HUNDRED_GROUPS: &[(u32, &[&str])] = &[(100, &["מאה"]),
                                            (200, &["מאתיים", "מאתים"]),
                                            (300, &["שלוש מאות", "שלושה מאות"]),
                                            (400, &["ארבע מאות"]),
                                            (500, &["חמש מאות"]),
                                            (600, &["שש מאות"]),
                                            (700, &["שבע מאות"]),
                                            (800, &["שמונה מאות"]),
                                            (900, &["תשע מאות"])];

const SCALE_GROUPS: &[(Scale, &[&str])] = &[(Scale::Thousand, &["אלף", THOUSANDS]),
                                            (Scale::Million, &["מיליון", "מליון"]),
                                            (Scale::Billion, &["מיליארד", "מליארד"])];

const FRACTION_GROUPS: &[(Fraction, &[&str])] =
    &[(Fraction::Half, &["חצי"]), (Fraction::Quarter, &["רבע"])];

/// A numeral multiplier word.
///
/// Variants are declared in ascending order of magnitude, so the derived
/// ordering matches the ordering of [`Scale::multiplier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scale {
    /// 1 000.
    Thousand,
    /// 1 000 000.
    Million,
    /// 1 000 000 000.
    Billion,
}

impl Scale {
    /// Returns the integer multiplier of this scale.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::Thousand => 1_000,
            Self::Million => 1_000_000,
            Self::Billion => 1_000_000_000,
        }
    }

    /// Returns the multiplier as a float, for accumulating parse totals.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn factor(self) -> f64 {
        self.multiplier() as f64
    }

    /// Returns the canonical spelling of this scale.
    #[must_use]
    pub fn word(self) -> &'static str {
        canonical(SCALE_GROUPS, &self).unwrap_or_default()
    }
}

/// A fraction word that may be added once per expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fraction {
    /// "חצי", one half.
    Half,
    /// "רבע", one quarter.
    Quarter,
}

impl Fraction {
    /// Returns the numeric value of this fraction.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Quarter => 0.25,
        }
    }
}

static UNITS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| index(UNIT_GROUPS));
static TENS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| index(TEN_GROUPS));
static HUNDREDS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| index(HUNDRED_GROUPS));
static SCALES: Lazy<HashMap<&'static str, Scale>> = Lazy::new(|| index(SCALE_GROUPS));
static FRACTIONS: Lazy<HashMap<&'static str, Fraction>> = Lazy::new(|| index(FRACTION_GROUPS));

/// Flattens `(value, synonyms)` groups into a word lookup table.
fn index<V: Copy>(groups: &'static [(V, &'static [&'static str])]) -> HashMap<&'static str, V> {
    groups.iter()
          .flat_map(|(value, words)| words.iter().map(move |word| (*word, *value)))
          .collect()
}

/// Returns the first (canonical) spelling listed for `value`.
fn canonical<V: PartialEq>(groups: &'static [(V, &'static [&'static str])],
                           value: &V)
                           -> Option<&'static str> {
    groups.iter()
          .find(|(v, _)| v == value)
          .and_then(|(_, words)| words.first().copied())
}

/// Unit words (0 through 9).
#[must_use]
pub fn units() -> &'static HashMap<&'static str, u32> {
    &UNITS
}

/// Tens words (10 through 90).
#[must_use]
pub fn tens() -> &'static HashMap<&'static str, u32> {
    &TENS
}

/// Hundreds words, including the two-word compounds.
#[must_use]
pub fn hundreds() -> &'static HashMap<&'static str, u32> {
    &HUNDREDS
}

/// Scale words and their spelling variants.
#[must_use]
pub fn scales() -> &'static HashMap<&'static str, Scale> {
    &SCALES
}

/// Fraction words.
#[must_use]
pub fn fractions() -> &'static HashMap<&'static str, Fraction> {
    &FRACTIONS
}

/// Looks up a two-word hundreds compound such as "שלוש מאות".
#[must_use]
pub fn compound_hundreds(first: &str, second: &str) -> Option<u32> {
    HUNDREDS.get(format!("{first} {second}").as_str()).copied()
}

/// Canonical unit word for a digit.
#[must_use]
pub fn unit_word(value: u32) -> Option<&'static str> {
    canonical(UNIT_GROUPS, &value)
}

/// Canonical tens word for a multiple of ten.
#[must_use]
pub fn tens_word(value: u32) -> Option<&'static str> {
    canonical(TEN_GROUPS, &value)
}

/// Canonical hundreds word (possibly two words) for a multiple of a hundred.
#[must_use]
pub fn hundreds_word(value: u32) -> Option<&'static str> {
    canonical(HUNDRED_GROUPS, &value)
}
