//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod repl;
mod responder;
mod session;

pub use logging::{FileLoggingConfig, expand_home};
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use responder::FileResponderConfig;
pub use session::FileSessionConfig;

use chatline_application::SessionConfig;
use chatline_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat server endpoint
    pub responder: FileResponderConfig,
    /// Session behavior
    pub session: FileSessionConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Diagnostic and conversation logs
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the configuration unusable; warnings have a fallback.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.responder.validate());
        issues.extend(self.session.parse_busy_policy().1);
        issues.extend(self.session.parse_welcome().1);
        issues
    }

    /// Build the session configuration, applying fallbacks for bad values.
    pub fn session_config(&self) -> SessionConfig {
        let (busy_policy, _) = self.session.parse_busy_policy();
        let (welcome, _) = self.session.parse_welcome();
        SessionConfig::from_timeout_seconds(Some(self.responder.timeout_seconds))
            .with_busy_policy(busy_policy)
            .with_welcome(welcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatline_domain::{BusyPolicy, OutputFormat};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[responder]
base_url = "https://chat.example.com"
endpoint = "/api/reply"
query_param = "q"
timeout_seconds = 5

[session]
busy_policy = "silent"
welcome = "Hi there"

[repl]
show_typing = false
history_file = "~/.local/share/chatline/history.txt"

[output]
format = "json"
color = false

[logging]
conversation_log = "/tmp/chat.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.responder.url(), "https://chat.example.com/api/reply");
        assert_eq!(config.responder.query_param, "q");
        assert_eq!(config.session.parse_busy_policy().0, BusyPolicy::Silent);
        assert!(!config.repl.show_typing);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());

        let session = config.session_config();
        assert_eq!(session.timeout, Some(Duration::from_secs(5)));
        assert_eq!(session.busy_policy, BusyPolicy::Silent);
        assert_eq!(session.welcome, "Hi there");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[responder]
base_url = "http://localhost:9000"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.responder.url(), "http://localhost:9000/get-response/");
        // Defaults should apply
        assert_eq!(config.responder.query_param, "message");
        assert!(config.output.color);
        assert!(config.repl.show_typing);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(
            config.session_config().timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_validate_mixes_errors_and_warnings() {
        let toml_str = r#"
[responder]
timeout_seconds = 0

[session]
busy_policy = "queue"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 1);
        assert_eq!(issues.iter().filter(|i| !i.is_error()).count(), 1);
    }
}
