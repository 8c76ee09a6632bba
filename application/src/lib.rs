//! Application layer for chatline
//!
//! This crate contains the chat session use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    chat_view::{ChatView, NoView},
    clock::{Clock, FixedClock},
    confirm_prompt::{AutoConfirm, AutoDecline, ConfirmError, ConfirmPrompt},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    responder::{Responder, ResponderError},
};
pub use use_cases::chat_session::{ChatSession, ExchangeDispatcher, PendingExchange};
