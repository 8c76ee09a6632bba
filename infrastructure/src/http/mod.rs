//! HTTP adapter for the [`Responder`](chatline_application::Responder) port.

mod responder;

pub use responder::{HttpResponder, HttpResponderError};
