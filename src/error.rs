/// Grammar errors.
///
/// Defines the single error type raised while converting a phrase: unknown
/// words, scale words out of order, reused fractions, misplaced tens and
/// malformed decimal phrases. Every variant names the offending word and its
/// position in the source text.
pub mod grammar_error;

pub use grammar_error::GrammarError;
