//! Domain layer for answer-router
//!
//! This crate contains the routing policy, answer extraction and vote
//! tallying. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! A question is labelled by a classifier ([`QuestionLabel`]); the label and
//! two text heuristics (multiple-choice shape, question length) select a
//! [`RoutePlan`]. Every route ends in a plain string answer.
//!
//! ## Self-consistency
//!
//! Long math problems are sampled several times with chain-of-thought and
//! the extracted integers are tallied in a [`FrequencyTally`]; the most
//! frequent candidate wins, first-seen on ties.

pub mod answer;
pub mod classification;
pub mod core;
pub mod evaluation;
pub mod prompt;
pub mod routing;
pub mod session;

// Re-export commonly used types
pub use answer::{FrequencyTally, extract_integer};
pub use classification::{QuestionLabel, is_short_problem, looks_like_multiple_choice};
pub use core::{
    error::DomainError,
    question::{AnswerRecord, Question},
};
pub use evaluation::{DomainStats, EvaluationReport, Mistake};
pub use prompt::PromptTemplate;
pub use routing::{MathPath, RoutePlan, SolveOutcome, SolverPolicy, Strategy};
pub use session::{ChatRequest, ModelResponse};
