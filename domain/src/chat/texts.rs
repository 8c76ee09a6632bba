//! Fixed user-facing strings rendered into the transcript.

/// Rendered when the responder reports failure without reply text.
pub const FALLBACK_ERROR_TEXT: &str = "Sorry, I encountered an error. Please try again.";

/// Rendered when the request itself fails (status, network, timeout).
pub const CONNECTIVITY_ERROR_TEXT: &str =
    "Sorry, I had trouble connecting. Please check your internet and try again.";

/// The single message left after a confirmed history reset.
pub const RESET_GREETING_TEXT: &str = "Chat history cleared. How can I help you today?";

/// Default greeting shown when a session starts.
pub const DEFAULT_WELCOME_TEXT: &str = "Hello! I am a chatbot. How can I help you today?";

/// System notice for an exchange that vanished without an outcome.
pub const CONNECTION_LOST_TEXT: &str = "Connection lost. Please check your internet connection.";

/// Feedback for a submission rejected while a reply is pending.
pub const BUSY_NOTICE_TEXT: &str = "Bot is typing, please wait...";

/// Question asked before clearing the transcript.
pub const RESET_CONFIRM_PROMPT: &str = "Are you sure you want to clear the chat history?";
