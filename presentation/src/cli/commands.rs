//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// `Bot: text  [HH:MM]`
    Text,
    /// The reply message as JSON
    Json,
}

impl From<CliOutputFormat> for chatline_domain::OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Text => chatline_domain::OutputFormat::Text,
            CliOutputFormat::Json => chatline_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for chatline
#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(author, version, about = "Terminal client for an HTTP chat responder")]
#[command(long_about = r#"
Chatline sends each line you type to a chat server and prints the reply.

Each message is sent as GET <base_url><endpoint>?message=<text>, and the
server answers with {"success": bool, "bot_response": "..."}.

Configuration files are loaded from (in priority order):
1. CHATLINE_* environment variables (e.g. CHATLINE_RESPONDER__BASE_URL)
2. --config <path>     Explicit config file
3. ./chatline.toml     Project-level config
4. ~/.config/chatline/config.toml   Global config

Example:
  chatline
  chatline --url http://localhost:5000 --timeout 10
  chatline --message "Hello" --output json
"#)]
pub struct Cli {
    /// Send one message, print the reply and exit
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Base URL of the chat server
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Path of the chat endpoint
    #[arg(long, value_name = "PATH")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format for --message
    #[arg(short, long, value_enum)]
    pub output: Option<CliOutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append conversation events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
