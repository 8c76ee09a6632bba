//! Domain layer for chatline
//!
//! This crate contains the core entities and value objects of a chat
//! session. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Exchange
//!
//! One user submission paired with its single eventual reply or error.
//! Every exchange ends in an [`ExchangeOutcome`], and every outcome renders
//! to exactly one Bot [`Message`].
//!
//! ## Transcript
//!
//! The ordered, append-only list of rendered messages. The only non-append
//! operation is a reset to a single canned greeting.

pub mod chat;
pub mod config;
pub mod core;
pub mod exchange;

// Re-export commonly used types
pub use chat::{
    message::{Message, MessageStatus, Sender},
    texts,
    transcript::Transcript,
};
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{error::DomainError, string::preview};
pub use exchange::{
    outcome::ExchangeOutcome, policy::BusyPolicy, reply::ResponderReply, state::SessionState,
};
