//! Infrastructure layer for chatline
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clock;
pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use clock::SystemClock;
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig,
    FileResponderConfig, FileSessionConfig, expand_home,
};
pub use http::{HttpResponder, HttpResponderError};
pub use logging::JsonlConversationLogger;
