//! Application-level configuration.
//!
//! This module provides the configuration that controls how the chat
//! session behaves: the request timeout, busy feedback and welcome text.

use chatline_domain::{BusyPolicy, texts::DEFAULT_WELCOME_TEXT};
use std::time::Duration;

/// Default upper bound on a single exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Session behavior configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum time to wait for the responder. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Feedback for submissions made while a reply is pending.
    pub busy_policy: BusyPolicy,
    /// Greeting rendered by `ChatSession::start`.
    pub welcome: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            busy_policy: BusyPolicy::default(),
            welcome: DEFAULT_WELCOME_TEXT.to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a SessionConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_busy_policy(mut self, policy: BusyPolicy) -> Self {
        self.busy_policy = policy;
        self
    }

    pub fn with_welcome(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = welcome.into();
        self
    }
}
