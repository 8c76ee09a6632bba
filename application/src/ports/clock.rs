//! Clock port
//!
//! Supplies the display timestamp stamped on each message.

/// Source of message timestamps
pub trait Clock: Send + Sync {
    /// Current time formatted for display (e.g. `"14:05"`).
    fn now_label(&self) -> String;
}

/// Clock that always returns the same label
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
}

impl Clock for FixedClock {
    fn now_label(&self) -> String {
        self.0.clone()
    }
}
