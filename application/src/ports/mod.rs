//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod chat_view;
pub mod clock;
pub mod confirm_prompt;
pub mod conversation_logger;
pub mod responder;
