//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - why a submission was not accepted
//! - [`string::preview`] - log-friendly text previews

pub mod error;
pub mod string;
