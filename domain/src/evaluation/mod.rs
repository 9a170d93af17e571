//! Evaluation domain - exact-match scoring against gold answers.

pub mod report;

pub use report::{DomainStats, EvaluationReport, Mistake};
