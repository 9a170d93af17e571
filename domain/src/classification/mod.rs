//! Question classification domain
//!
//! - [`label::QuestionLabel`] - closed set of categories plus an explicit
//!   unrecognized variant, parsed from raw classifier output
//! - [`heuristics`] - text detectors used when no label matches

pub mod heuristics;
pub mod label;

pub use heuristics::{is_short_problem, looks_like_multiple_choice};
pub use label::QuestionLabel;
