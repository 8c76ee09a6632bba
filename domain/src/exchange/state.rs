//! Session state - the single in-flight guard

use crate::core::error::DomainError;

/// Whether the session is waiting on the responder.
///
/// Lifecycle of one exchange: idle -> awaiting -> idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    awaiting_response: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    /// Move to awaiting, or fail with [`DomainError::Busy`] if already there.
    pub fn try_begin(&mut self) -> Result<(), DomainError> {
        if self.awaiting_response {
            return Err(DomainError::Busy);
        }
        self.awaiting_response = true;
        Ok(())
    }

    /// Return to idle. Idempotent.
    pub fn finish(&mut self) {
        self.awaiting_response = false;
    }
}
