//! Output format value object

use serde::{Deserialize, Serialize};

/// How one-shot replies are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rendered `Sender: text` lines (default)
    Text,
    /// The reply message as a JSON object
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}
