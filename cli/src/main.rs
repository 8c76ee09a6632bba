//! CLI entrypoint for chatline
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use chatline_application::{
    ChatSession, ChatView, ConversationLogger, NoConversationLogger, NoView, Responder,
};
use chatline_domain::{ConfigIssue, OutputFormat};
use chatline_infrastructure::{
    ConfigLoader, FileConfig, HttpResponder, JsonlConversationLogger, SystemClock, expand_home,
};
use chatline_presentation::{
    ChatRepl, Cli, ConsoleFormatter, ConsoleView, LineReader, OutputConfig, ReplConfig, ReplExit,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let _log_guard = init_logging(cli.verbose, config.logging.directory_path().as_deref())?;
    info!("Starting chatline");

    check_config(&config.validate())?;

    let output_config = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };
    output_config.apply_color();

    // === Dependency Injection ===
    let responder: Arc<dyn Responder> = Arc::new(
        HttpResponder::from_config(&config.responder)
            .context("Failed to create chat responder")?,
    );
    info!("Chat endpoint: {}", config.responder.url());

    let conversation_logger = open_conversation_logger(
        cli.log_conversation
            .clone()
            .or_else(|| config.logging.conversation_log_path()),
    )?;

    // One-shot mode
    if let Some(text) = &cli.message {
        let session = ChatSession::new(responder, Arc::new(NoView), Arc::new(SystemClock))
            .with_config(config.session_config())
            .with_conversation_logger(conversation_logger);
        return run_once(session, text, output_config.format).await;
    }

    // Interactive mode
    let repl_config = ReplConfig {
        show_typing: config.repl.show_typing,
        history_file: config.repl.history_file.as_deref().map(expand_home),
    };
    let view: Arc<dyn ChatView> = Arc::new(ConsoleView::new(repl_config.show_typing));
    let session = ChatSession::new(responder, Arc::clone(&view), Arc::new(SystemClock))
        .with_config(config.session_config())
        .with_conversation_logger(conversation_logger);

    let reader = LineReader::spawn(repl_config.history_path());
    let mut repl = ChatRepl::new(session, view, reader);

    match repl.run().await {
        ReplExit::Failed => Ok(ExitCode::FAILURE),
        ReplExit::Quit | ReplExit::Eof => Ok(ExitCode::SUCCESS),
    }
}

/// Command-line flags sit above every other configuration source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.responder.base_url = url.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        config.responder.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.responder.timeout_seconds = timeout;
    }
    if cli.no_color {
        config.output.color = false;
    }
}

/// Log warnings; refuse to start on errors.
fn check_config(issues: &[ConfigIssue]) -> Result<()> {
    let mut errors = Vec::new();
    for issue in issues {
        if issue.is_error() {
            errors.push(issue.message.as_str());
        } else {
            warn!("{}", issue.message);
        }
    }

    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
///
/// With a log directory, output goes to a daily-rotated file and the
/// returned guard must live until exit.
fn init_logging(verbose: u8, directory: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "chatline.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn open_conversation_logger(path: Option<PathBuf>) -> Result<Arc<dyn ConversationLogger>> {
    let Some(path) = path else {
        return Ok(Arc::new(NoConversationLogger));
    };
    let logger = JsonlConversationLogger::open(&path)
        .with_context(|| format!("Failed to open conversation log {}", path.display()))?;
    info!("Conversation log: {}", logger.path().display());
    Ok(Arc::new(logger))
}

/// Send one message and print the reply. Error replies exit non-zero.
async fn run_once(mut session: ChatSession, text: &str, format: OutputFormat) -> Result<ExitCode> {
    let message = session.submit(text).await?;

    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format_message(&message),
        OutputFormat::Json => ConsoleFormatter::format_json(&message),
    };
    println!("{}", output);

    Ok(if message.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
