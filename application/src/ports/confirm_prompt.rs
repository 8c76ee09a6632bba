//! Confirmation port for destructive session operations.
//!
//! Clearing the transcript asks the user first. How the question is asked
//! (terminal prompt, dialog, test double) is a presentation concern.
//!
//! # Built-in Implementations
//!
//! - [`AutoConfirm`] - Always answers yes
//! - [`AutoDecline`] - Always answers no
//!
//! For interactive use, see `LineConfirm` in the presentation layer.

use async_trait::async_trait;
use thiserror::Error;

/// Failures while asking, as opposed to a "no" answer.
#[derive(Error, Debug, Clone)]
pub enum ConfirmError {
    /// User cancelled the prompt (e.g., via Ctrl+C).
    #[error("Operation cancelled")]
    Cancelled,
    /// Input/output error (e.g., terminal read failure).
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Port for yes/no questions to the user.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    /// Ask `question` and return the user's answer.
    async fn confirm(&self, question: &str) -> Result<bool, ConfirmError>;
}

/// Always confirms. Used by non-interactive callers that already decided.
pub struct AutoConfirm;

#[async_trait]
impl ConfirmPrompt for AutoConfirm {
    async fn confirm(&self, _question: &str) -> Result<bool, ConfirmError> {
        Ok(true)
    }
}

/// Always declines.
pub struct AutoDecline;

#[async_trait]
impl ConfirmPrompt for AutoDecline {
    async fn confirm(&self, _question: &str) -> Result<bool, ConfirmError> {
        Ok(false)
    }
}
