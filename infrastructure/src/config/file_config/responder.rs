//! Responder endpoint configuration from TOML (`[responder]` section)

use chatline_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where and how chat messages are sent
///
/// # Example
///
/// ```toml
/// [responder]
/// base_url = "http://127.0.0.1:8000"
/// endpoint = "/get-response/"
/// query_param = "message"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResponderConfig {
    /// Scheme, host and port of the chat server
    pub base_url: String,
    /// Path of the chat endpoint
    pub endpoint: String,
    /// Query argument carrying the user text
    pub query_param: String,
    /// Upper bound on one exchange
    pub timeout_seconds: u64,
}

impl Default for FileResponderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            endpoint: "/get-response/".to_string(),
            query_param: "message".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FileResponderConfig {
    /// Join base URL and endpoint with exactly one slash between them.
    pub fn url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.endpoint.trim_start_matches('/');
        if path.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, path)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    value: self.base_url.clone(),
                },
                format!(
                    "responder.base_url: '{}' is not an http(s) URL",
                    self.base_url
                ),
            ));
        }

        if self.query_param.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "responder.query_param".to_string(),
                },
                "responder.query_param cannot be empty",
            ));
        }

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "responder.timeout_seconds cannot be 0",
            ));
        }

        issues
    }
}
