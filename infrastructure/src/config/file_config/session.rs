//! Session behavior configuration from TOML (`[session]` section)

use chatline_domain::texts::DEFAULT_WELCOME_TEXT;
use chatline_domain::{BusyPolicy, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Busy feedback ("notify" or "silent")
    pub busy_policy: String,
    /// Greeting shown at start-up
    pub welcome: Option<String>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            busy_policy: BusyPolicy::default().to_string(),
            welcome: None,
        }
    }
}

impl FileSessionConfig {
    /// Parse busy_policy, falling back to the default on unknown values.
    pub fn parse_busy_policy(&self) -> (BusyPolicy, Vec<ConfigIssue>) {
        match self.busy_policy.parse::<BusyPolicy>() {
            Ok(policy) => (policy, Vec::new()),
            Err(_) => {
                let fallback = BusyPolicy::default();
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "session.busy_policy".to_string(),
                        value: self.busy_policy.clone(),
                        valid_values: vec!["notify".to_string(), "silent".to_string()],
                    },
                    format!(
                        "session.busy_policy: unknown value '{}', falling back to '{}'",
                        self.busy_policy, fallback
                    ),
                );
                (fallback, vec![issue])
            }
        }
    }

    /// Resolve the welcome text; an empty override falls back to the default.
    pub fn parse_welcome(&self) -> (String, Vec<ConfigIssue>) {
        match &self.welcome {
            None => (DEFAULT_WELCOME_TEXT.to_string(), Vec::new()),
            Some(w) if w.trim().is_empty() => (
                DEFAULT_WELCOME_TEXT.to_string(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::EmptyValue {
                        field: "session.welcome".to_string(),
                    },
                    "session.welcome is empty, using the default greeting",
                )],
            ),
            Some(w) => (w.clone(), Vec::new()),
        }
    }
}
