//! Route selection - the pure decision half of `solve_question`.
//!
//! [`RoutePlan::for_question`] maps a classifier label plus the question text
//! to the work the solver must do. Executing the plan (model calls,
//! extraction, fallbacks) is an application-layer concern.
//!
//! ```text
//! label ──┬─ math ───────────── short? ─┬─ yes → ChainOfThought ×1 → extract │ DirectAnswer
//!         │                             └─ no  → SelfConsistency ×N → vote   │ DirectAnswer
//!         ├─ coding ─────────── Coding
//!         ├─ futurePrediction ─ FuturePrediction
//!         ├─ planning ───────── Planning
//!         ├─ commonSense ────── DomainDirectAnswer
//!         └─ unrecognized ───── MCQ-shaped? ─┬─ yes → FewShotMultipleChoice
//!                                            └─ no  → DomainDirectAnswer
//! ```

use super::policy::SolverPolicy;
use super::strategy::Strategy;
use crate::classification::{QuestionLabel, is_short_problem, looks_like_multiple_choice};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a math question is solved
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum MathPath {
    /// One chain-of-thought pass, then integer extraction
    SingleChainOfThought { temperature: f32 },
    /// Majority vote over several chain-of-thought passes
    SelfConsistency { attempts: usize, temperature: f32 },
}

/// The selected route for one question
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutePlan {
    /// Math sub-policy; falls back to [`Strategy::DirectAnswer`] on extraction failure
    Math { path: MathPath },
    /// A single strategy call whose trimmed text is the answer
    Single { strategy: Strategy, temperature: f32 },
}

impl RoutePlan {
    /// Decide the route for a question
    pub fn for_question(label: &QuestionLabel, text: &str, policy: &SolverPolicy) -> Self {
        let single = |strategy: Strategy| RoutePlan::Single {
            strategy,
            temperature: policy.fallback_temperature,
        };

        match label {
            QuestionLabel::Math => RoutePlan::Math {
                path: Self::math_path(text, policy),
            },
            QuestionLabel::Coding => single(Strategy::Coding),
            QuestionLabel::FuturePrediction => single(Strategy::FuturePrediction),
            QuestionLabel::Planning => single(Strategy::Planning),
            QuestionLabel::CommonSense => single(Strategy::DomainDirectAnswer),
            QuestionLabel::Unrecognized(_) => {
                if looks_like_multiple_choice(text) {
                    single(Strategy::FewShotMultipleChoice)
                } else {
                    single(Strategy::DomainDirectAnswer)
                }
            }
        }
    }

    fn math_path(text: &str, policy: &SolverPolicy) -> MathPath {
        if is_short_problem(text, policy.short_problem_chars) {
            MathPath::SingleChainOfThought {
                temperature: policy.fast_path_temperature,
            }
        } else {
            MathPath::SelfConsistency {
                attempts: policy.self_consistency_attempts,
                temperature: policy.self_consistency_temperature,
            }
        }
    }
}

impl fmt::Display for RoutePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutePlan::Math {
                path: MathPath::SingleChainOfThought { temperature },
            } => write!(f, "math: chain_of_thought x1 @ {temperature}"),
            RoutePlan::Math {
                path:
                    MathPath::SelfConsistency {
                        attempts,
                        temperature,
                    },
            } => write!(f, "math: self_consistency x{attempts} @ {temperature}"),
            RoutePlan::Single {
                strategy,
                temperature,
            } => write!(f, "{strategy} @ {temperature}"),
        }
    }
}
