use tracing::trace;

use crate::{
    error::GrammarError,
    interpreter::parser::{
        accumulator::Accumulator,
        decimal, strictness,
        term::{Lexeme, Term},
    },
    lexicon::{Fraction, Scale},
};

pub type ParseResult<T> = Result<T, GrammarError>;

/// Where the scan currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Ready to read the next term.
    AwaitingTerm,
    /// A decimal point was read; its digit phrase starts at the cursor.
    InDecimalPhrase {
        /// Index of the point lexeme.
        point: usize,
    },
    /// A scale group was just committed; a conjoined fraction may follow.
    AfterScale,
}

/// Left-to-right scanner over classified lexemes.
struct Parser<'a> {
    lexemes: &'a [Lexeme],
    cursor:  usize,
    state:   State,
    acc:     Accumulator,
}

/// Parses a classified phrase into its numeric value.
///
/// Runs the strictness pre-scan, then a single scan that tries, at each
/// position: decimal point, conjoined fraction, bare fraction, numeral,
/// hundreds, tens, unit, scale. Anything else is an unknown word.
///
/// Grammar (simplified):
/// ```text
///     phrase  := segment* term*
///     segment := term* scale ("ו"? fraction)?
///     term    := numeral fraction? | hundreds | tens | unit
///              | "ו"? fraction | "נקודה" digits
/// ```
///
/// # Errors
/// Any [`GrammarError`]; the first violation ends the parse.
pub fn parse(lexemes: &[Lexeme]) -> ParseResult<f64> {
    strictness::check(lexemes)?;
    Parser::new(lexemes).run()
}

impl<'a> Parser<'a> {
    fn new(lexemes: &'a [Lexeme]) -> Self {
        Self { lexemes,
               cursor: 0,
               state: State::AwaitingTerm,
               acc: Accumulator::new() }
    }

    fn run(mut self) -> ParseResult<f64> {
        loop {
            match self.state {
                State::AwaitingTerm => {
                    let lexemes = self.lexemes;
                    let Some(lexeme) = lexemes.get(self.cursor) else {
                        break;
                    };
                    self.term(lexeme)?;
                },
                State::InDecimalPhrase { point } => self.decimal_phrase(point)?,
                State::AfterScale => self.after_scale()?,
            }
        }
        Ok(self.acc.total())
    }

    /// Handles one construct starting at `lexeme`, the lexeme at the cursor.
    fn term(&mut self, lexeme: &Lexeme) -> ParseResult<()> {
        if let Some((fraction, width)) = self.conjoined_fraction(self.cursor) {
            let word = &self.lexemes[self.cursor + width - 1];
            self.acc.attach_fraction(fraction, word)?;
            self.cursor += width;
            return Ok(());
        }

        match lexeme.term {
            Term::Point => {
                self.acc.open_decimal(lexeme)?;
                self.state = State::InDecimalPhrase { point: self.cursor };
                self.cursor += 1;
            },
            Term::Fraction(fraction) => {
                self.acc.add_fraction(fraction, lexeme)?;
                self.cursor += 1;
            },
            Term::Numeral(value) => {
                self.acc.add(value);
                self.cursor += 1;
                if let Some((fraction, width)) = self.trailing_fraction(self.cursor) {
                    let word = &self.lexemes[self.cursor + width - 1];
                    self.acc.add_fraction(fraction, word)?;
                    self.cursor += width;
                }
            },
            Term::Hundreds(value) | Term::Unit(value) => {
                trace!(value, word = %lexeme.text, "add term");
                self.acc.add(f64::from(value));
                self.cursor += 1;
            },
            Term::Tens(value) => {
                self.acc.add_tens(value, lexeme)?;
                self.cursor += 1;
            },
            Term::Scale(scale) => self.scale(scale, lexeme)?,
            Term::Conjunction | Term::Unknown => {
                return Err(GrammarError::UnknownWord { token:    lexeme.text.clone(),
                                                       position: lexeme.position, });
            },
        }
        Ok(())
    }

    fn scale(&mut self, scale: Scale, lexeme: &Lexeme) -> ParseResult<()> {
        self.acc.commit_scale(scale, lexeme)?;
        self.cursor += 1;
        self.state = State::AfterScale;
        Ok(())
    }

    /// Reads the digit phrase after a decimal point and adds its value.
    fn decimal_phrase(&mut self, point: usize) -> ParseResult<()> {
        let point = &self.lexemes[point];
        let rest = &self.lexemes[self.cursor..];
        let len = decimal::phrase_len(rest);

        if len == 0 {
            if let Some(next) = rest.first()
               && matches!(next.term, Term::Scale(scale) if scale > Scale::Thousand)
            {
                return Err(GrammarError::ScaleInDecimalPhrase { token:    next.text.clone(),
                                                                position: next.position, });
            }
            return Err(GrammarError::MissingDecimalPhrase { position: point.position });
        }

        let digits = decimal::digits(&rest[..len])?;
        let value = decimal::fraction_value(&digits, point)?;
        trace!(digits = %digits, value, "add decimal phrase");
        self.acc.add(value);
        self.cursor += len;
        self.state = State::AwaitingTerm;
        Ok(())
    }

    /// Attaches a conjoined fraction that directly follows a scale word
    /// ("מיליון וחצי") to that scale.
    fn after_scale(&mut self) -> ParseResult<()> {
        self.state = State::AwaitingTerm;
        if let Some((fraction, width)) = self.conjoined_fraction(self.cursor) {
            let word = &self.lexemes[self.cursor + width - 1];
            self.acc.attach_fraction(fraction, word)?;
            self.cursor += width;
        }
        Ok(())
    }

    /// A fraction joined by "ו" at `at`, either fused ("וחצי") or as a separate
    /// particle ("ו חצי"). Returns the fraction and the number of lexemes it
    /// spans.
    fn conjoined_fraction(&self, at: usize) -> Option<(Fraction, usize)> {
        match self.lexemes.get(at)?.term {
            Term::Fraction(fraction) if self.lexemes[at].conjunctive => Some((fraction, 1)),
            Term::Conjunction => match self.lexemes.get(at + 1)?.term {
                Term::Fraction(fraction) => Some((fraction, 2)),
                _ => None,
            },
            _ => None,
        }
    }

    /// A conjoined or bare fraction at `at`.
    fn trailing_fraction(&self, at: usize) -> Option<(Fraction, usize)> {
        self.conjoined_fraction(at).or_else(|| match self.lexemes.get(at)?.term {
                                       Term::Fraction(fraction) => Some((fraction, 1)),
                                       _ => None,
                                   })
    }
}
