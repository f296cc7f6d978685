use serde::Serialize;

use crate::{convert, format};

/// The outcome of converting one phrase, as reported to a caller.
///
/// Serializes untagged, so a success is `{"number": .., "hebrew": ..}` and a
/// failure is `{"error": ".."}`. `hebrew` is omitted unless requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// The phrase converted successfully.
    Converted {
        number: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        hebrew: Option<String>,
    },
    /// The phrase was rejected.
    Failed {
        /// The rendered grammar error.
        error: String,
    },
}

impl Response {
    /// Converts `text` and, when `with_words` is set, renders the value back
    /// into Hebrew words.
    ///
    /// # Example
    /// ```
    /// use hebnum::response::Response;
    ///
    /// let response = Response::from_text("שבע", false);
    /// assert_eq!(response, Response::Converted { number: 7.0, hebrew: None });
    /// assert!(Response::from_text("בננה", false).is_failure());
    /// ```
    #[must_use]
    pub fn from_text(text: &str, with_words: bool) -> Self {
        match convert(text) {
            Ok(number) => Self::Converted { number,
                                            hebrew: with_words.then(|| format(number)) },
            Err(e) => Self::Failed { error: e.to_string() },
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
