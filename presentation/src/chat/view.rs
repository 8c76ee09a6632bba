//! Terminal implementation of the chat view

use crate::output::console::ConsoleFormatter;
use chatline_application::ChatView;
use chatline_domain::Message;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const TYPING_TEXT: &str = "Bot is typing...";

/// Prints messages to stdout and shows an indicatif spinner while typing.
///
/// The terminal has no editable input box, so the "input control" is the
/// last line handed over by the REPL.
pub struct ConsoleView {
    input: Mutex<String>,
    controls_enabled: AtomicBool,
    show_typing: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleView {
    pub fn new(show_typing: bool) -> Self {
        Self {
            input: Mutex::new(String::new()),
            controls_enabled: AtomicBool::new(true),
            show_typing,
            spinner: Mutex::new(None),
        }
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled.load(Ordering::SeqCst)
    }

    pub fn is_typing_visible(&self) -> bool {
        self.spinner.lock().map(|s| s.is_some()).unwrap_or(false)
    }

    fn typing_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Print above the spinner if one is running.
    fn print_line(&self, line: &str) {
        match self.spinner.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(spinner) => spinner.suspend(|| println!("{}", line)),
                None => println!("{}", line),
            },
            Err(_) => println!("{}", line),
        }
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ChatView for ConsoleView {
    fn input_text(&self) -> String {
        self.input.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn set_input_text(&self, text: &str) {
        if let Ok(mut input) = self.input.lock() {
            *input = text.to_string();
        }
    }

    // The prompt is redrawn by the line reader.
    fn focus_input(&self) {}

    fn set_controls_enabled(&self, enabled: bool) {
        self.controls_enabled.store(enabled, Ordering::SeqCst);
    }

    fn set_typing_visible(&self, visible: bool) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        if visible {
            if self.show_typing && spinner.is_none() {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::typing_style());
                pb.set_message(TYPING_TEXT);
                pb.enable_steady_tick(Duration::from_millis(100));
                *spinner = Some(pb);
            }
        } else if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
    }

    fn append_message(&self, message: &Message) {
        self.print_line(&ConsoleFormatter::format_message(message));
    }

    fn render_transcript(&self, messages: &[Message]) {
        self.print_line(ConsoleFormatter::format_transcript(messages).trim_end());
    }

    fn show_notice(&self, text: &str) {
        self.print_line(&ConsoleFormatter::format_notice(text));
    }
}
