//! y/N confirmation read from the REPL's own input thread

use super::input::{LineReader, ReplInput};
use async_trait::async_trait;
use chatline_application::{ConfirmError, ConfirmPrompt};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Asks on the terminal and waits for the next line.
///
/// Shares the [`LineReader`] with the REPL loop, so the loop must not be
/// waiting on it while a confirmation is in progress.
pub struct LineConfirm {
    reader: Arc<Mutex<LineReader>>,
}

impl LineConfirm {
    pub fn new(reader: Arc<Mutex<LineReader>>) -> Self {
        Self { reader }
    }
}

#[async_trait]
impl ConfirmPrompt for LineConfirm {
    async fn confirm(&self, question: &str) -> Result<bool, ConfirmError> {
        let mut reader = self.reader.lock().await;
        reader.request(&format!("{} [y/N] ", question), false);
        match reader.next().await {
            ReplInput::Line(answer) => Ok(is_affirmative(&answer)),
            ReplInput::Interrupted => Err(ConfirmError::Cancelled),
            ReplInput::Eof => Err(ConfirmError::IoError("input closed".to_string())),
            ReplInput::Failed(e) => Err(ConfirmError::IoError(e)),
        }
    }
}

/// `y` or `yes`, any case. Everything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
