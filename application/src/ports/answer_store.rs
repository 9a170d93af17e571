//! Answer store port
//!
//! Persistence of the answers list so a batch run can resume where it
//! stopped.

use router_domain::AnswerRecord;
use thiserror::Error;

/// Errors from reading or writing stored answers
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("{path} must contain a JSON list")]
    NotAList { path: String },

    #[error("Existing answers missing 'output' at index {index}")]
    MissingOutput { index: usize },
}

/// Storage for the answers produced by a batch run
pub trait AnswerStore: Send + Sync {
    /// Load previously saved answers; an absent store yields an empty list
    fn load(&self) -> Result<Vec<AnswerRecord>, StoreError>;

    /// Replace the stored answers with `answers`
    fn save(&self, answers: &[AnswerRecord]) -> Result<(), StoreError>;
}
