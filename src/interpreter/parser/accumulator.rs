use tracing::trace;

use crate::{
    error::GrammarError,
    interpreter::parser::{core::ParseResult, term::Lexeme},
    lexicon::{Fraction, Scale},
};

/// A committed magnitude tier: `value` times the scale's multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Group {
    /// The amount of this tier, possibly fractional ("2.5 מיליארד").
    pub value: f64,
    /// The tier's multiplier.
    pub scale: Scale,
}

/// Running state of one conversion.
///
/// Terms add into `current_group` until a scale word commits it as a
/// [`Group`]. A segment is the span between two scale commits.
#[derive(Debug, Default)]
pub struct Accumulator {
    current_group:        f64,
    groups:               Vec<Group>,
    last_scale:           Option<Scale>,
    used_fraction:        bool,
    seen_tens_in_segment: bool,
    point_in_segment:     bool,
}

impl Accumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a unit, hundreds, numeral or decimal value to the current group.
    pub fn add(&mut self, value: f64) {
        self.current_group += value;
    }

    /// Adds a tens word, rejecting a second one in the same segment.
    pub fn add_tens(&mut self, value: u32, lexeme: &Lexeme) -> ParseResult<()> {
        if self.seen_tens_in_segment {
            return Err(GrammarError::RepeatedTens { token:    lexeme.text.clone(),
                                                    position: lexeme.position, });
        }
        self.seen_tens_in_segment = true;
        self.add(f64::from(value));
        Ok(())
    }

    /// Marks the start of a decimal phrase, rejecting a second point in the
    /// same segment.
    pub fn open_decimal(&mut self, lexeme: &Lexeme) -> ParseResult<()> {
        if self.point_in_segment {
            return Err(GrammarError::RepeatedDecimalPoint { position: lexeme.position });
        }
        self.point_in_segment = true;
        Ok(())
    }

    /// Commits the current group under `scale` and starts a new segment.
    ///
    /// An empty current group counts as 1, so a bare "מיליון" is one million.
    ///
    /// # Errors
    /// `ScaleOrder` if `scale` is not strictly smaller than the last committed
    /// scale.
    pub fn commit_scale(&mut self, scale: Scale, lexeme: &Lexeme) -> ParseResult<()> {
        if let Some(previous) = self.last_scale
           && scale >= previous
        {
            return Err(GrammarError::ScaleOrder { token:    lexeme.text.clone(),
                                                  previous: previous.word().to_string(),
                                                  position: lexeme.position, });
        }

        let value = if self.current_group > 0.0 { self.current_group } else { 1.0 };
        trace!(value, multiplier = scale.multiplier(), "commit scale group");
        self.groups.push(Group { value, scale });
        self.last_scale = Some(scale);
        self.current_group = 0.0;
        self.seen_tens_in_segment = false;
        self.point_in_segment = false;
        Ok(())
    }

    /// Adds a standalone (unprefixed) fraction to the current group.
    pub fn add_fraction(&mut self, fraction: Fraction, lexeme: &Lexeme) -> ParseResult<()> {
        self.claim_fraction(lexeme)?;
        self.add(fraction.value());
        Ok(())
    }

    /// Adds a conjoined fraction ("וחצי", "ו חצי").
    ///
    /// A non-zero current group takes the fraction ("שלוש וחצי" is 3.5).
    /// Otherwise, once a scale group exists, the fraction becomes its own group
    /// with that scale's multiplier ("מיליון וחצי" is 1 500 000).
    pub fn attach_fraction(&mut self, fraction: Fraction, lexeme: &Lexeme) -> ParseResult<()> {
        self.claim_fraction(lexeme)?;

        match self.groups.last() {
            Some(last) if self.current_group <= 0.0 => {
                let scale = last.scale;
                trace!(fraction = fraction.value(),
                       multiplier = scale.multiplier(),
                       "attach fraction to scale");
                self.groups.push(Group { value: fraction.value(),
                                         scale });
            },
            _ => self.add(fraction.value()),
        }
        Ok(())
    }

    fn claim_fraction(&mut self, lexeme: &Lexeme) -> ParseResult<()> {
        if self.used_fraction {
            return Err(GrammarError::FractionReused { token:    lexeme.text.clone(),
                                                      position: lexeme.position, });
        }
        self.used_fraction = true;
        Ok(())
    }

    /// Committed groups, largest multiplier first.
    #[cfg(test)]
    fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Sums every committed group and the remaining current group.
    #[must_use]
    pub fn total(&self) -> f64 {
        let committed = self.groups
                            .iter()
                            .fold(0.0, |sum, group| sum + group.value * group.scale.factor());
        committed + self.current_group
    }
}
