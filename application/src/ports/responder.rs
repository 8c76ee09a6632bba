//! Responder port
//!
//! Defines the interface for the external service that answers chat
//! messages. The service is opaque: one text in, one reply body out.

use async_trait::async_trait;
use chatline_domain::ResponderReply;
use thiserror::Error;

/// Errors that can occur while asking the responder
///
/// Every variant is a transport failure from the session's point of view.
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway to the chat responder
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Send one user message and return the decoded reply body.
    ///
    /// Non-success statuses must be reported as [`ResponderError::Status`],
    /// never decoded.
    async fn respond(&self, text: &str) -> Result<ResponderReply, ResponderError>;
}
