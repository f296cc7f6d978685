use logos::Logos;
use tracing::trace;

use crate::lexicon::{CONJUNCTIVE_PREFIX, TWO_THOUSAND, TWO_THOUSAND_EXPANSION};

/// Represents a raw lexical token in the source text.
///
/// The numeral grammar is word based, so the lexer only separates words:
/// whitespace and the maqaf (`־`) are separators, every other run of characters
/// is a word. Classification happens later, in the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum RawToken {
    /// A maximal run of non-separator characters, such as `ושלוש` or `2.5`.
    #[regex(r"[^\s־]+", |lex| {
        lex.extras.position += 1;
        lex.slice().to_string()
    }, allow_greedy = true)]
    Word(String),
    /// Whitespace and maqaf separators.
    #[regex(r"[\s־]+", logos::skip)]
    Separator,
}

/// Additional information carried by the lexer during tokenization.
///
/// Counts the words seen so far so that every token knows its position in the
/// source text.
#[derive(Default)]
pub struct LexerExtras {
    /// The 1-based position of the most recent word.
    pub position: usize,
}

/// A word of the input after prefix stripping and compound expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word with any conjunctive prefix removed.
    pub text:        String,
    /// Whether the word carried the conjunctive prefix `ו`.
    pub conjunctive: bool,
    /// 1-based position of the source word this token came from.
    pub position:    usize,
}

impl Word {
    fn new(text: impl Into<String>, conjunctive: bool, position: usize) -> Self {
        Self { text: text.into(),
               conjunctive,
               position }
    }
}

/// Splits a phrase into words.
///
/// Each word that starts with the conjunctive prefix `ו` and has more than one
/// letter loses that letter and is flagged as conjunctive. The plural
/// "אלפיים" expands into "שניים" + "אלפים" (neither flagged), so the parser
/// only ever sees single-scale words.
///
/// Tokenization never fails; an empty phrase yields no words.
///
/// # Example
/// ```
/// use hebnum::interpreter::lexer::tokenize;
///
/// let words = tokenize("מיליון וחצי");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text, "חצי");
/// assert!(words[1].conjunctive);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Word> {
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras::default());
    let mut words = Vec::new();

    while let Some(token) = lexer.next() {
        let raw = match token {
            Ok(RawToken::Word(text)) => text,
            Ok(RawToken::Separator) => continue,
            // Both patterns together cover every character.
            Err(()) => lexer.slice().to_string(),
        };
        let position = lexer.extras.position;

        let (text, conjunctive) = match raw.strip_prefix(CONJUNCTIVE_PREFIX) {
            Some(rest) if !rest.is_empty() => (rest.to_string(), true),
            _ => (raw, false),
        };

        if text == TWO_THOUSAND {
            let [two, thousands] = TWO_THOUSAND_EXPANSION;
            words.push(Word::new(two, false, position));
            words.push(Word::new(thousands, false, position));
        } else {
            words.push(Word::new(text, conjunctive, position));
        }
    }

    trace!(count = words.len(), "tokenized phrase");
    words
}
