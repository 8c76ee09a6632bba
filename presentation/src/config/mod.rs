//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use chatline_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// How one-shot replies are printed
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Apply the color setting process-wide.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the typing spinner while a reply is pending
    pub show_typing: bool,
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_typing: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// The configured history file, or `<data dir>/chatline/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("chatline").join("history.txt")))
    }
}
