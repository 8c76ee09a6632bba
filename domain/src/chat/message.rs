//! Message entity

use serde::{Deserialize, Serialize};

/// Who authored a message in the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
    System,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "User",
            Sender::Bot => "Bot",
            Sender::System => "System",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rendering status of a message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Normal,
    Error,
}

/// A single rendered line of the conversation (Entity)
///
/// Messages are immutable once created: fields are private and there are
/// no setters. The transcript only ever appends or replaces wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
    timestamp: String,
    status: MessageStatus,
}

impl Message {
    pub fn new(
        sender: Sender,
        text: impl Into<String>,
        timestamp: impl Into<String>,
        status: MessageStatus,
    ) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: timestamp.into(),
            status,
        }
    }

    pub fn user(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(Sender::User, text, timestamp, MessageStatus::Normal)
    }

    pub fn bot(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text, timestamp, MessageStatus::Normal)
    }

    pub fn bot_error(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text, timestamp, MessageStatus::Error)
    }

    pub fn system_error(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(Sender::System, text, timestamp, MessageStatus::Error)
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn status(&self) -> MessageStatus {
        self.status
    }

    pub fn is_error(&self) -> bool {
        self.status == MessageStatus::Error
    }
}
