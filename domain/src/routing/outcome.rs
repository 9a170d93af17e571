//! Solve outcome value object

use super::plan::RoutePlan;
use crate::answer::FrequencyTally;
use crate::classification::QuestionLabel;
use serde::{Deserialize, Serialize};

/// The answer to one question plus how it was reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveOutcome {
    /// Final trimmed answer; possibly empty, never absent
    pub answer: String,
    /// Classifier label (default/unknown when routing was forced)
    pub label: QuestionLabel,
    /// Route that was executed
    pub route: RoutePlan,
    /// Whether the direct-answer fallback produced the answer
    pub fallback_used: bool,
    /// Vote tally, for self-consistency routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tally: Option<FrequencyTally>,
}

impl SolveOutcome {
    pub fn new(answer: impl Into<String>, label: QuestionLabel, route: RoutePlan) -> Self {
        Self {
            answer: answer.into().trim().to_string(),
            label,
            route,
            fallback_used: false,
            tally: None,
        }
    }

    pub fn with_fallback(mut self, fallback_used: bool) -> Self {
        self.fallback_used = fallback_used;
        self
    }

    pub fn with_tally(mut self, tally: FrequencyTally) -> Self {
        self.tally = Some(tally);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Strategy;

    #[test]
    fn test_answer_is_trimmed() {
        let outcome = SolveOutcome::new(
            "  Paris \n",
            QuestionLabel::CommonSense,
            RoutePlan::Single {
                strategy: Strategy::DomainDirectAnswer,
                temperature: 0.0,
            },
        );
        assert_eq!(outcome.answer, "Paris");
        assert!(!outcome.fallback_used);
        assert!(outcome.tally.is_none());
    }
}
