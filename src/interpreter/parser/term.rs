use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    interpreter::lexer::Word,
    lexicon::{self, CONJUNCTION, Fraction, POINT, Scale},
};

static NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("numeral pattern is valid"));

/// The grammatical role of a word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term {
    /// "נקודה", opens a decimal digit phrase.
    Point,
    /// "ו" written as a separate word.
    Conjunction,
    /// "חצי" or "רבע".
    Fraction(Fraction),
    /// A digit literal, optionally with an embedded decimal point.
    Numeral(f64),
    /// 100 through 900, from one word or a merged two-word compound.
    Hundreds(u32),
    /// 10 through 90.
    Tens(u32),
    /// 0 through 9.
    Unit(u32),
    /// Thousand, million or billion.
    Scale(Scale),
    /// Anything outside the vocabulary.
    Unknown,
}

/// A classified word.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// What the word means to the grammar.
    pub term:        Term,
    /// The word as written (without its conjunctive prefix). Merged hundreds
    /// keep both words separated by a space.
    pub text:        String,
    /// Whether the word carried the conjunctive prefix.
    pub conjunctive: bool,
    /// 1-based position of the word in the source.
    pub position:    usize,
}

impl Lexeme {
    /// Returns `true` for a numeral made of digits only.
    pub(crate) fn is_integral_numeral(&self) -> bool {
        matches!(self.term, Term::Numeral(_)) && self.text.bytes().all(|b| b.is_ascii_digit())
    }

    pub(crate) const fn is_tens(&self) -> bool {
        matches!(self.term, Term::Tens(_))
    }
}

/// Classifies a single word on its own.
fn classify_word(text: &str) -> Term {
    if text == POINT {
        return Term::Point;
    }
    if text == CONJUNCTION {
        return Term::Conjunction;
    }
    if let Some(fraction) = lexicon::fractions().get(text) {
        return Term::Fraction(*fraction);
    }
    if NUMERAL.is_match(text)
       && let Ok(value) = text.parse()
    {
        return Term::Numeral(value);
    }
    if let Some(value) = lexicon::hundreds().get(text) {
        return Term::Hundreds(*value);
    }
    if let Some(value) = lexicon::tens().get(text) {
        return Term::Tens(*value);
    }
    if let Some(value) = lexicon::units().get(text) {
        return Term::Unit(*value);
    }
    if let Some(scale) = lexicon::scales().get(text) {
        return Term::Scale(*scale);
    }
    Term::Unknown
}

/// Classifies a word sequence into lexemes.
///
/// Two consecutive words forming a registered hundreds compound ("שלוש מאות")
/// are merged into one [`Term::Hundreds`] lexeme that keeps the first word's
/// conjunctive flag and position. Unknown words are kept as [`Term::Unknown`]
/// so that the parser can report them where they occur.
#[must_use]
pub fn classify(words: &[Word]) -> Vec<Lexeme> {
    let mut lexemes = Vec::with_capacity(words.len());
    let mut index = 0;

    while let Some(word) = words.get(index) {
        if let Some(next) = words.get(index + 1)
           && let Some(value) = lexicon::compound_hundreds(&word.text, &next.text)
        {
            lexemes.push(Lexeme { term:        Term::Hundreds(value),
                                  text:        format!("{} {}", word.text, next.text),
                                  conjunctive: word.conjunctive,
                                  position:    word.position, });
            index += 2;
            continue;
        }

        lexemes.push(Lexeme { term:        classify_word(&word.text),
                              text:        word.text.clone(),
                              conjunctive: word.conjunctive,
                              position:    word.position, });
        index += 1;
    }

    lexemes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn terms(source: &str) -> Vec<Term> {
        classify(&tokenize(source)).into_iter().map(|l| l.term).collect()
    }

    #[test]
    fn classifies_each_vocabulary_kind() {
        assert_eq!(terms("נקודה ו חצי 2.5 מאה עשרים שבע מיליון בננה"),
                   [Term::Point,
                    Term::Conjunction,
                    Term::Fraction(Fraction::Half),
                    Term::Numeral(2.5),
                    Term::Hundreds(100),
                    Term::Tens(20),
                    Term::Unit(7),
                    Term::Scale(Scale::Million),
                    Term::Unknown]);
    }

    #[test]
    fn merges_two_word_hundreds() {
        let lexemes = classify(&tokenize("אלף ושלוש מאות"));
        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[1].term, Term::Hundreds(300));
        assert_eq!(lexemes[1].text, "שלוש מאות");
        assert!(lexemes[1].conjunctive);
        assert_eq!(lexemes[1].position, 2);
    }

    #[test]
    fn malformed_numerals_are_unknown() {
        assert_eq!(terms("1.2.3"), [Term::Unknown]);
        assert_eq!(terms("שבע."), [Term::Unknown]);
    }

    #[test]
    fn integral_numerals() {
        let lexemes = classify(&tokenize("25 2.5"));
        assert!(lexemes[0].is_integral_numeral());
        assert!(!lexemes[1].is_integral_numeral());
    }
}
