//! Chat transcript domain.
//!
//! - [`message::Message`] - one immutable rendered line
//! - [`transcript::Transcript`] - ordered messages plus the append counter
//! - [`texts`] - fixed strings the session renders

pub mod message;
pub mod texts;
pub mod transcript;
