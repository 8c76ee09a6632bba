//! Presentation layer for chatline
//!
//! This crate contains CLI definitions, the terminal view, output
//! formatting, and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatRepl, ConsoleView, LineReader, ReplExit};
pub use cli::commands::{Cli, CliOutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::{ConsoleFormatter, sanitize_for_terminal};
