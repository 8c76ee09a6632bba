//! Domain error types

use thiserror::Error;

/// Reasons a submission is not turned into an exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message is empty")]
    EmptyInput,

    #[error("A reply is still pending")]
    Busy,
}

impl DomainError {
    /// Check if this error represents a busy rejection
    pub fn is_busy(&self) -> bool {
        matches!(self, DomainError::Busy)
    }
}
