//! Line input on a dedicated blocking thread
//!
//! rustyline blocks, so it runs on its own thread and hands lines to the
//! async event loop over a channel. The thread reads exactly one line per
//! [`ReadRequest`], which keeps the terminal out of raw mode whenever the
//! loop is not waiting for input.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use std::thread::JoinHandle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// One event from the input thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Line(String),
    /// Ctrl-C at the prompt
    Interrupted,
    /// Ctrl-D or closed stdin
    Eof,
    Failed(String),
}

/// Ask the input thread for one line
#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub prompt: String,
    /// Add the line to persistent history
    pub record: bool,
}

/// Handle to the input thread
pub struct LineReader {
    requests: Option<std_mpsc::Sender<ReadRequest>>,
    lines: mpsc::UnboundedReceiver<ReplInput>,
    thread: Option<JoinHandle<()>>,
}

impl LineReader {
    /// Start the rustyline thread, loading history from `history` if set.
    pub fn spawn(history: Option<PathBuf>) -> Self {
        let (request_tx, request_rx) = std_mpsc::channel::<ReadRequest>();
        let (line_tx, line_rx) = mpsc::unbounded_channel();

        let thread = std::thread::spawn(move || read_loop(history, request_rx, line_tx));

        Self {
            requests: Some(request_tx),
            lines: line_rx,
            thread: Some(thread),
        }
    }

    /// Build a reader over existing channels (no terminal).
    pub fn from_channels(
        requests: std_mpsc::Sender<ReadRequest>,
        lines: mpsc::UnboundedReceiver<ReplInput>,
    ) -> Self {
        Self {
            requests: Some(requests),
            lines,
            thread: None,
        }
    }

    /// Ask for the next line under `prompt`.
    pub fn request(&self, prompt: &str, record: bool) {
        let request = ReadRequest {
            prompt: prompt.to_string(),
            record,
        };
        let sent = self
            .requests
            .as_ref()
            .is_some_and(|requests| requests.send(request).is_ok());
        if !sent {
            debug!("Input thread already stopped");
        }
    }

    /// Wait for the next input event. Cancel-safe.
    pub async fn next(&mut self) -> ReplInput {
        self.lines.recv().await.unwrap_or(ReplInput::Eof)
    }

    /// Stop the input thread and wait for it to save history.
    ///
    /// Must not be called while a read request is outstanding.
    pub fn close(&mut self) {
        self.requests = None;
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            warn!("Input thread panicked");
        }
    }
}

fn read_loop(
    history: Option<PathBuf>,
    requests: std_mpsc::Receiver<ReadRequest>,
    lines: mpsc::UnboundedSender<ReplInput>,
) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            let _ = lines.send(ReplInput::Failed(e.to_string()));
            return;
        }
    };

    if let Some(path) = &history {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.load_history(path);
    }

    while let Ok(request) = requests.recv() {
        let (event, stop) = match rl.readline(&request.prompt) {
            Ok(line) => {
                if request.record && !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                    if let Some(path) = &history
                        && let Err(e) = rl.save_history(path)
                    {
                        debug!("Could not save history to {}: {}", path.display(), e);
                    }
                }
                (ReplInput::Line(line), false)
            }
            Err(ReadlineError::Interrupted) => (ReplInput::Interrupted, false),
            Err(ReadlineError::Eof) => (ReplInput::Eof, true),
            Err(err) => (ReplInput::Failed(err.to_string()), true),
        };

        if lines.send(event).is_err() || stop {
            break;
        }
    }
}
