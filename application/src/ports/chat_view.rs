//! Chat view port
//!
//! The presentation surface the session drives: an input control, a submit
//! control, a message list, a typing indicator and a place for transient
//! notices. Implementations live in the presentation layer; the session
//! never reads state back from the view except the input text.

use chatline_domain::Message;

/// Output port from [`ChatSession`](crate::ChatSession) to the rendering surface
pub trait ChatView: Send + Sync {
    /// Current text of the input control.
    fn input_text(&self) -> String;

    /// Replace the text of the input control.
    fn set_input_text(&self, text: &str);

    /// Move focus back to the input control.
    fn focus_input(&self);

    /// Enable or disable input and submit controls together.
    fn set_controls_enabled(&self, enabled: bool);

    /// Show or hide the "typing" indicator.
    fn set_typing_visible(&self, visible: bool);

    /// Render one message at the end of the list.
    fn append_message(&self, message: &Message);

    /// Re-render the whole list.
    fn render_transcript(&self, messages: &[Message]);

    /// Show a transient notice outside the transcript.
    fn show_notice(&self, _text: &str) {}
}

/// View that renders nothing, for headless use
pub struct NoView;

impl ChatView for NoView {
    fn input_text(&self) -> String {
        String::new()
    }
    fn set_input_text(&self, _text: &str) {}
    fn focus_input(&self) {}
    fn set_controls_enabled(&self, _enabled: bool) {}
    fn set_typing_visible(&self, _visible: bool) {}
    fn append_message(&self, _message: &Message) {}
    fn render_transcript(&self, _messages: &[Message]) {}
}
