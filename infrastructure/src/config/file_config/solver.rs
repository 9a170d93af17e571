//! Solver configuration from TOML (`[solver]` section)

use super::ConfigIssue;
use router_domain::{DomainError, SolverPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Routing and math-solving knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSolverConfig {
    /// Math questions shorter than this take a single chain-of-thought pass.
    pub short_problem_chars: usize,
    pub fast_path_temperature: f32,
    /// Chain-of-thought samples for long math problems.
    pub self_consistency_attempts: usize,
    pub self_consistency_temperature: f32,
    /// Issue self-consistency samples concurrently.
    pub parallel_attempts: bool,
}

impl Default for FileSolverConfig {
    fn default() -> Self {
        let policy = SolverPolicy::default();
        Self {
            short_problem_chars: policy.short_problem_chars,
            fast_path_temperature: policy.fast_path_temperature,
            self_consistency_attempts: policy.self_consistency_attempts,
            self_consistency_temperature: policy.self_consistency_temperature,
            parallel_attempts: policy.parallel_attempts,
        }
    }
}

impl FileSolverConfig {
    /// Build the domain policy; `request_timeout` comes from `[endpoint]`
    pub fn to_policy(&self, request_timeout: Duration) -> SolverPolicy {
        SolverPolicy {
            short_problem_chars: self.short_problem_chars,
            fast_path_temperature: self.fast_path_temperature,
            self_consistency_attempts: self.self_consistency_attempts,
            self_consistency_temperature: self.self_consistency_temperature,
            parallel_attempts: self.parallel_attempts,
            request_timeout,
            ..SolverPolicy::default()
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.self_consistency_attempts == 0 {
            issues.push(ConfigIssue::error(
                "solver.self_consistency_attempts",
                DomainError::NoAttempts.to_string(),
            ));
        }

        let temperatures = [
            ("solver.fast_path_temperature", self.fast_path_temperature),
            (
                "solver.self_consistency_temperature",
                self.self_consistency_temperature,
            ),
        ];
        for (field, value) in temperatures {
            if !(0.0..=2.0).contains(&value) {
                issues.push(ConfigIssue::error(
                    field,
                    DomainError::InvalidTemperature(value).to_string(),
                ));
            }
        }

        if self.short_problem_chars == 0 {
            issues.push(ConfigIssue::warning(
                "solver.short_problem_chars",
                "0 disables the single chain-of-thought path for math",
            ));
        }
        issues
    }
}
