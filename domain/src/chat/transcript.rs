//! Transcript entity - the ordered list of rendered messages

use super::message::Message;
use super::texts::RESET_GREETING_TEXT;

/// The ordered sequence of messages for one session (Entity)
///
/// `message_count` mirrors the number of messages appended since the last
/// reset. Seeded and reset greetings are not counted.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    message_count: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript holding one uncounted greeting.
    pub fn with_greeting(greeting: Message) -> Self {
        Self {
            messages: vec![greeting],
            message_count: 0,
        }
    }

    /// Append a message and return its 1-based sequence number.
    pub fn append(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.message_count += 1;
        self.message_count
    }

    /// Replace every message with the canned reset greeting.
    pub fn reset(&mut self, timestamp: impl Into<String>) {
        self.messages = vec![Message::bot(RESET_GREETING_TEXT, timestamp)];
        self.message_count = 0;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn message_count(&self) -> usize {
        self.message_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_counts_messages() {
        let mut t = Transcript::new();
        assert_eq!(t.append(Message::user("a", "10:00")), 1);
        assert_eq!(t.append(Message::bot("b", "10:00")), 2);
        assert_eq!(t.len(), 2);
        assert_eq!(t.message_count(), 2);
        assert_eq!(t.last().unwrap().text(), "b");
    }

    #[test]
    fn test_greeting_is_not_counted() {
        let t = Transcript::with_greeting(Message::bot("hi", "09:00"));
        assert_eq!(t.len(), 1);
        assert_eq!(t.message_count(), 0);
    }

    #[test]
    fn test_reset_leaves_single_greeting() {
        let mut t = Transcript::new();
        t.append(Message::user("a", "10:00"));
        t.append(Message::bot("b", "10:00"));

        t.reset("11:15");

        assert_eq!(t.len(), 1);
        assert_eq!(t.message_count(), 0);
        let greeting = t.last().unwrap();
        assert_eq!(greeting.text(), RESET_GREETING_TEXT);
        assert_eq!(greeting.timestamp(), "11:15");
        assert!(!greeting.is_error());
    }
}
