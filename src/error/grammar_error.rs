use thiserror::Error;

/// Represents every way a Hebrew numeral phrase can be rejected.
///
/// Positions are 1-based indices of words in the source text. Both halves of
/// an expanded "אלפיים" share the position of the original word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A word that is not part of the numeral vocabulary.
    #[error("Error at word {position}: Unknown word: {token}.")]
    UnknownWord {
        /// The unrecognized word.
        token:    String,
        /// The word's position in the source.
        position: usize,
    },
    /// A scale word that is not strictly smaller than the previous one.
    #[error("Error at word {position}: Scale word '{token}' cannot follow '{previous}'; scales must \
             strictly decrease.")]
    ScaleOrder {
        /// The offending scale word.
        token:    String,
        /// The canonical spelling of the previously committed scale.
        previous: String,
        /// The word's position in the source.
        position: usize,
    },
    /// A second fraction word in the same expression.
    #[error("Error at word {position}: Fraction '{token}' used more than once in one expression.")]
    FractionReused {
        /// The second fraction word.
        token:    String,
        /// The word's position in the source.
        position: usize,
    },
    /// A second tens word before any scale word separates the two.
    #[error("Error at word {position}: Tens word '{token}' repeats within one segment.")]
    RepeatedTens {
        /// The second tens word.
        token:    String,
        /// The word's position in the source.
        position: usize,
    },
    /// Two tens words in immediate sequence, optionally joined by "ו".
    #[error("Error at word {position}: Tens words '{first}' and '{second}' cannot follow each \
             other.")]
    ConsecutiveTens {
        /// The first tens word.
        first:    String,
        /// The tens word that follows it.
        second:   String,
        /// Position of the first tens word.
        position: usize,
    },
    /// A tens word followed by the doubled-unit plural of "thousand".
    #[error("Error at word {position}: '{token}' cannot be followed by the plural 'two thousand'.")]
    MalformedMagnitude {
        /// The tens word.
        token:    String,
        /// The word's position in the source.
        position: usize,
    },
    /// A decimal point with no numeric phrase after it.
    #[error("Error at word {position}: Decimal point must be followed by a numeric phrase.")]
    MissingDecimalPhrase {
        /// Position of the decimal point word.
        position: usize,
    },
    /// A decimal point directly followed by million or billion.
    #[error("Error at word {position}: Scale word '{token}' cannot follow a decimal point.")]
    ScaleInDecimalPhrase {
        /// The scale word.
        token:    String,
        /// The word's position in the source.
        position: usize,
    },
    /// A second decimal point in one segment.
    #[error("Error at word {position}: More than one decimal point in the same segment.")]
    RepeatedDecimalPoint {
        /// Position of the second decimal point word.
        position: usize,
    },
    /// A `.` inside a word that is not a numeral literal.
    #[error("Error at word {position}: Misplaced decimal point in '{token}'.")]
    MisplacedPoint {
        /// The word containing the dot.
        token:    String,
        /// The word's position in the source.
        position: usize,
    },
    /// A numeral inside a decimal phrase too large to be represented.
    #[error("Error at word {position}: Literal '{token}' is too large.")]
    LiteralTooLarge {
        /// The literal.
        token:    String,
        /// The word's position in the source.
        position: usize,
    },
}

impl GrammarError {
    /// Returns the 1-based position of the word that caused the error.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownWord { position, .. }
            | Self::ScaleOrder { position, .. }
            | Self::FractionReused { position, .. }
            | Self::RepeatedTens { position, .. }
            | Self::ConsecutiveTens { position, .. }
            | Self::MalformedMagnitude { position, .. }
            | Self::MissingDecimalPhrase { position }
            | Self::ScaleInDecimalPhrase { position, .. }
            | Self::RepeatedDecimalPoint { position }
            | Self::MisplacedPoint { position, .. }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}
