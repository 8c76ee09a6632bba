//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the rolling diagnostic log; stderr only when unset
    pub directory: Option<String>,
    /// JSONL file receiving one line per conversation event
    pub conversation_log: Option<String>,
}

impl FileLoggingConfig {
    pub fn directory_path(&self) -> Option<PathBuf> {
        self.directory.as_deref().map(expand_home)
    }

    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        self.conversation_log.as_deref().map(expand_home)
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
