//! Wall-clock adapter for the [`Clock`](chatline_application::Clock) port.

use chatline_application::Clock;

/// Format of message timestamps (24-hour hours and minutes)
pub const TIME_LABEL_FORMAT: &str = "%H:%M";

/// Local time, formatted as `HH:MM`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_label(&self) -> String {
        chrono::Local::now().format(TIME_LABEL_FORMAT).to_string()
    }
}
