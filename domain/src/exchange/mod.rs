//! Exchange domain: one submission and its single reply.
//!
//! - [`reply::ResponderReply`] - the responder's JSON body
//! - [`outcome::ExchangeOutcome`] - Reply / LogicalFailure / TransportFailure
//! - [`state::SessionState`] - the awaiting-response guard
//! - [`policy::BusyPolicy`] - feedback for rejected submissions

pub mod outcome;
pub mod policy;
pub mod reply;
pub mod state;
