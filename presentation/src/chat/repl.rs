//! REPL (Read-Eval-Print Loop) for interactive chat

use super::confirm::LineConfirm;
use super::input::{LineReader, ReplInput};
use chatline_application::{ChatSession, ChatView, PendingExchange};
use chatline_domain::ExchangeOutcome;
use colored::Colorize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

const PROMPT: &str = "You: ";
const FAREWELL_TEXT: &str = "Goodbye! Have a great day!";
const EOF_FAREWELL_TEXT: &str = "Goodbye! Thanks for chatting!";

/// What one input line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Clear,
    Transcript,
    Unknown(String),
    /// Anything else is a chat message, passed on untrimmed
    Chat(String),
}

/// Classify an input line. `quit`, `exit` and `bye` need no slash.
pub fn parse_line(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "bye" => return ReplCommand::Quit,
        _ => {}
    }

    if !trimmed.starts_with('/') {
        return ReplCommand::Chat(line.to_string());
    }

    match trimmed {
        "/quit" | "/exit" | "/q" => ReplCommand::Quit,
        "/help" | "/h" | "/?" => ReplCommand::Help,
        "/clear" => ReplCommand::Clear,
        "/transcript" => ReplCommand::Transcript,
        other => ReplCommand::Unknown(other.to_string()),
    }
}

/// Why the REPL stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplExit {
    Quit,
    Eof,
    Failed,
}

struct InFlight {
    pending: PendingExchange,
    handle: JoinHandle<ExchangeOutcome>,
}

enum Event {
    Input(ReplInput),
    Completed(Result<ExchangeOutcome, JoinError>),
}

/// Interactive chat REPL
///
/// Owns the session. No line is requested while a reply is pending, so the
/// terminal is never in raw mode while the spinner or the reply is drawn.
pub struct ChatRepl {
    session: ChatSession,
    view: Arc<dyn ChatView>,
    reader: Arc<Mutex<LineReader>>,
}

impl ChatRepl {
    /// `view` must be the view the session renders into.
    pub fn new(session: ChatSession, view: Arc<dyn ChatView>, reader: LineReader) -> Self {
        Self {
            session,
            view,
            reader: Arc::new(Mutex::new(reader)),
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> ReplExit {
        self.session.start();
        println!("{}", "Type /help for commands, quit to leave.".dimmed());
        self.prompt().await;

        let mut in_flight: Option<InFlight> = None;

        let exit = loop {
            let event = {
                let mut reader = self.reader.lock().await;
                tokio::select! {
                    input = reader.next() => Event::Input(input),
                    joined = wait_for(&mut in_flight) => Event::Completed(joined),
                }
            };

            match event {
                Event::Completed(joined) => {
                    if let Some(flight) = in_flight.take() {
                        self.finish(flight.pending, joined);
                    }
                    self.prompt().await;
                }
                Event::Input(ReplInput::Line(line)) => {
                    match parse_line(&line) {
                        ReplCommand::Quit => {
                            println!("{}", FAREWELL_TEXT);
                            break ReplExit::Quit;
                        }
                        ReplCommand::Help => Self::print_help(),
                        ReplCommand::Clear => {
                            let confirm = LineConfirm::new(Arc::clone(&self.reader));
                            self.session.reset(&confirm).await;
                        }
                        ReplCommand::Transcript => {
                            self.view
                                .render_transcript(self.session.transcript().messages());
                        }
                        ReplCommand::Unknown(cmd) => {
                            println!("Unknown command: {}", cmd);
                            println!("Type /help for available commands");
                        }
                        ReplCommand::Chat(text) => {
                            if let Some(flight) = self.submit(&text) {
                                in_flight = Some(flight);
                            }
                        }
                    }
                    // Input stays closed until the pending reply lands
                    if in_flight.is_none() {
                        self.prompt().await;
                    }
                }
                Event::Input(ReplInput::Interrupted) => {
                    println!("^C");
                    self.prompt().await;
                }
                Event::Input(ReplInput::Eof) => {
                    println!("{}", EOF_FAREWELL_TEXT);
                    break ReplExit::Eof;
                }
                Event::Input(ReplInput::Failed(e)) => {
                    eprintln!("Error: {}", e);
                    break ReplExit::Failed;
                }
            }
        };

        if let Some(flight) = in_flight.take() {
            debug!("Abandoning pending exchange: {}", flight.pending.text());
            flight.handle.abort();
        }
        self.reader.lock().await.close();
        exit
    }

    async fn prompt(&self) {
        self.reader.lock().await.request(PROMPT, true);
    }

    fn submit(&mut self, text: &str) -> Option<InFlight> {
        self.view.set_input_text(text);
        let raw = self.view.input_text();
        match self.session.begin_exchange(&raw) {
            Ok(pending) => {
                let dispatcher = self.session.dispatcher();
                let request = pending.clone();
                let handle = tokio::spawn(async move { dispatcher.dispatch(&request).await });
                Some(InFlight { pending, handle })
            }
            Err(e) => {
                debug!("Submission rejected: {}", e);
                None
            }
        }
    }

    fn finish(&mut self, pending: PendingExchange, joined: Result<ExchangeOutcome, JoinError>) {
        match joined {
            Ok(outcome) => {
                self.session.complete_exchange(pending, outcome);
            }
            Err(e) => {
                debug!("Exchange task failed: {}", e);
                self.session.report_connection_lost(pending);
            }
        }
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?        - Show this help");
        println!("  /clear               - Clear the chat history");
        println!("  /transcript          - Show the whole conversation");
        println!("  /quit, quit, exit, bye - Exit chat");
        println!();
    }
}

async fn wait_for(in_flight: &mut Option<InFlight>) -> Result<ExchangeOutcome, JoinError> {
    match in_flight {
        Some(flight) => (&mut flight.handle).await,
        None => std::future::pending().await,
    }
}
