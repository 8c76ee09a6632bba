//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface.

mod confirm;
mod input;
mod repl;
mod view;

pub use confirm::{LineConfirm, is_affirmative};
pub use input::{LineReader, ReadRequest, ReplInput};
pub use repl::{ChatRepl, ReplCommand, ReplExit, parse_line};
pub use view::ConsoleView;
