//! Busy policy - what a rejected submission looks like to the user

use serde::{Deserialize, Serialize};

/// How a submission made while a reply is pending is surfaced.
///
/// Either way the submission is dropped and the transcript is untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusyPolicy {
    /// Drop silently; only a log line is written.
    Silent,
    /// Drop and show a transient notice outside the transcript.
    #[default]
    Notify,
}

impl BusyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusyPolicy::Silent => "silent",
            BusyPolicy::Notify => "notify",
        }
    }

    pub fn notifies(&self) -> bool {
        matches!(self, BusyPolicy::Notify)
    }
}

impl std::str::FromStr for BusyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "drop" => Ok(BusyPolicy::Silent),
            "notify" | "notice" => Ok(BusyPolicy::Notify),
            _ => Err(format!("Invalid BusyPolicy: {}", s)),
        }
    }
}

impl std::fmt::Display for BusyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
