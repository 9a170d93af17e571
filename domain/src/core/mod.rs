//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] - a benchmark question record
//! - [`question::AnswerRecord`] - one entry of an answers file
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod question;
