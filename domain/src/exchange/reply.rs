//! Responder reply body
//!
//! The wire shape returned by the chat endpoint. Only `success` and
//! `bot_response` drive behavior; `user_message` and `error` are carried
//! for logging.

use super::outcome::ExchangeOutcome;
use serde::{Deserialize, Serialize};

/// JSON body returned by the responder (Value Object)
///
/// ```
/// use chatline_domain::{ExchangeOutcome, ResponderReply};
///
/// let reply: ResponderReply =
///     serde_json::from_str(r#"{"success": true, "bot_response": "Hi there!"}"#).unwrap();
/// assert_eq!(reply.into_outcome(), ExchangeOutcome::Reply("Hi there!".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponderReply {
    /// Missing `success` is treated as failure.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub bot_response: Option<String>,
    #[serde(default)]
    pub user_message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ResponderReply {
    pub fn success(bot_response: impl Into<String>) -> Self {
        Self {
            success: true,
            bot_response: Some(bot_response.into()),
            ..Default::default()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Classify the reply into an exchange outcome.
    ///
    /// An empty `bot_response` counts as absent.
    pub fn into_outcome(self) -> ExchangeOutcome {
        let text = self.bot_response.filter(|t| !t.is_empty());
        match (self.success, text) {
            (true, Some(text)) => ExchangeOutcome::Reply(text),
            (_, text) => ExchangeOutcome::LogicalFailure {
                text,
                reason: self.error,
            },
        }
    }
}
