//! Batch parameters - answer generation and evaluation control.

use router_domain::evaluation::report::DEFAULT_MISTAKE_LIMIT;
use serde::{Deserialize, Serialize};

/// Batch run control parameters.
///
/// Used by [`GenerateAnswersUseCase`](crate::use_cases::generate_answers::GenerateAnswersUseCase)
/// and [`EvaluateUseCase`](crate::use_cases::evaluate::EvaluateUseCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchParams {
    /// Every answer must be strictly shorter than this many characters.
    pub max_answer_chars: usize,
    /// Evaluate only the first N questions.
    pub evaluation_limit: Option<usize>,
    /// Number of wrong predictions kept in the evaluation report.
    pub mistake_limit: usize,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            max_answer_chars: 5000,
            evaluation_limit: None,
            mistake_limit: DEFAULT_MISTAKE_LIMIT,
        }
    }
}

impl BatchParams {
    // ==================== Builder Methods ====================

    pub fn with_max_answer_chars(mut self, max: usize) -> Self {
        self.max_answer_chars = max;
        self
    }

    pub fn with_evaluation_limit(mut self, limit: Option<usize>) -> Self {
        self.evaluation_limit = limit;
        self
    }

    pub fn with_mistake_limit(mut self, limit: usize) -> Self {
        self.mistake_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = BatchParams::default();
        assert_eq!(params.max_answer_chars, 5000);
        assert_eq!(params.evaluation_limit, None);
        assert_eq!(params.mistake_limit, 20);
    }

    #[test]
    fn test_builder_chain() {
        let params = BatchParams::default()
            .with_max_answer_chars(100)
            .with_evaluation_limit(Some(200))
            .with_mistake_limit(5);
        assert_eq!(params.max_answer_chars, 100);
        assert_eq!(params.evaluation_limit, Some(200));
        assert_eq!(params.mistake_limit, 5);
    }
}
