//! Exchange outcome value object

use crate::chat::message::Message;
use crate::chat::texts::{CONNECTIVITY_ERROR_TEXT, FALLBACK_ERROR_TEXT};

/// The single result of one exchange.
///
/// Every exchange ends in exactly one of these, and every variant renders
/// to exactly one Bot message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// The responder answered with reply text.
    Reply(String),
    /// The responder answered but reported failure or sent no text.
    LogicalFailure {
        /// Server-provided text to show instead of the fallback.
        text: Option<String>,
        /// Server-provided error detail, for logs only.
        reason: Option<String>,
    },
    /// The request failed: HTTP error status, network error, bad body or timeout.
    TransportFailure { reason: String },
}

impl ExchangeOutcome {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::TransportFailure {
            reason: reason.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, ExchangeOutcome::Reply(_))
    }

    /// Short label used in logs and conversation events.
    pub fn kind(&self) -> &'static str {
        match self {
            ExchangeOutcome::Reply(_) => "reply",
            ExchangeOutcome::LogicalFailure { .. } => "logical_failure",
            ExchangeOutcome::TransportFailure { .. } => "transport_failure",
        }
    }

    /// Render the outcome as the Bot message appended to the transcript.
    pub fn to_message(&self, timestamp: impl Into<String>) -> Message {
        match self {
            ExchangeOutcome::Reply(text) => Message::bot(text.clone(), timestamp),
            ExchangeOutcome::LogicalFailure { text, .. } => Message::bot_error(
                text.clone()
                    .unwrap_or_else(|| FALLBACK_ERROR_TEXT.to_string()),
                timestamp,
            ),
            ExchangeOutcome::TransportFailure { .. } => {
                Message::bot_error(CONNECTIVITY_ERROR_TEXT, timestamp)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Sender;

    #[test]
    fn test_reply_renders_normal_bot_message() {
        let m = ExchangeOutcome::Reply("Hi there!".into()).to_message("10:00");
        assert_eq!(m.sender(), Sender::Bot);
        assert_eq!(m.text(), "Hi there!");
        assert!(!m.is_error());
    }

    #[test]
    fn test_logical_failure_uses_fallback_text() {
        let outcome = ExchangeOutcome::LogicalFailure {
            text: None,
            reason: Some("boom".into()),
        };
        let m = outcome.to_message("10:00");
        assert!(m.is_error());
        assert_eq!(m.text(), FALLBACK_ERROR_TEXT);
    }

    #[test]
    fn test_logical_failure_prefers_server_text() {
        let outcome = ExchangeOutcome::LogicalFailure {
            text: Some("Please type a message!".into()),
            reason: None,
        };
        assert_eq!(outcome.to_message("10:00").text(), "Please type a message!");
    }

    #[test]
    fn test_transport_failure_uses_connectivity_text() {
        let m = ExchangeOutcome::transport("HTTP 502").to_message("10:00");
        assert!(m.is_error());
        assert_eq!(m.sender(), Sender::Bot);
        assert_eq!(m.text(), CONNECTIVITY_ERROR_TEXT);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ExchangeOutcome::Reply("x".into()).kind(), "reply");
        assert_eq!(ExchangeOutcome::transport("x").kind(), "transport_failure");
        assert!(!ExchangeOutcome::Reply("x".into()).is_failure());
    }
}
