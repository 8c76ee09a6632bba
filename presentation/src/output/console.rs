//! Console output formatter for chat messages

use colored::Colorize;
use chatline_domain::{Message, Sender};

/// Formats chat messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one message as `Sender: text  [HH:MM]`.
    ///
    /// The user is labelled `You` to match the input prompt.
    ///
    /// Error-flagged messages are shown in red regardless of sender.
    pub fn format_message(message: &Message) -> String {
        let text = sanitize_for_terminal(message.text());
        let label = match message.sender() {
            Sender::User => "You:".green().bold(),
            Sender::Bot => "Bot:".cyan().bold(),
            Sender::System => "System:".yellow().bold(),
        };
        let body = if message.is_error() {
            text.red()
        } else {
            text.normal()
        };
        let stamp = format!("[{}]", message.timestamp()).dimmed();
        format!("{} {}  {}", label, body, stamp)
    }

    /// Format a whole transcript, one message per line.
    pub fn format_transcript(messages: &[Message]) -> String {
        let mut output = String::new();
        output.push_str(&Self::separator());
        output.push('\n');
        for message in messages {
            output.push_str(&Self::format_message(message));
            output.push('\n');
        }
        output
    }

    /// Format a transient notice that is not part of the transcript.
    pub fn format_notice(text: &str) -> String {
        format!("{} {}", "!".yellow().bold(), text.yellow())
    }

    /// Format a message as a single JSON object.
    pub fn format_json(message: &Message) -> String {
        serde_json::to_string_pretty(message).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("Could not serialize message: {}", e) })
                .to_string()
        })
    }

    fn separator() -> String {
        "─".repeat(48).dimmed().to_string()
    }
}

/// Strip control characters and ANSI escape sequences from server text.
///
/// Newlines and tabs survive. Escape sequences (`ESC [ ... final`) are
/// dropped whole so a reply cannot move the cursor or recolor the terminal.
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\u{1b}' => {
                match chars.peek() {
                    // CSI: parameters then a final byte in @..~
                    Some('[') => {
                        chars.next();
                        for next in chars.by_ref() {
                            if ('@'..='~').contains(&next) {
                                break;
                            }
                        }
                    }
                    // OSC: terminated by BEL or ESC \
                    Some(']') => {
                        chars.next();
                        while let Some(next) = chars.next() {
                            if next == '\u{7}' {
                                break;
                            }
                            if next == '\u{1b}' {
                                if chars.peek() == Some(&'\\') {
                                    chars.next();
                                }
                                break;
                            }
                        }
                    }
                    Some(_) => {
                        chars.next();
                    }
                    None => {}
                }
            }
            '\n' | '\t' => out.push(c),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out
}
