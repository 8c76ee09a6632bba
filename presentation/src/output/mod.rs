//! Terminal rendering of chat messages

pub mod console;
