//! Solver policy - the tunable knobs of the routing policy.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable parameters for routing and math solving.
///
/// By default short math problems
/// (< 100 chars) take one chain-of-thought pass at 0.5, longer ones take
/// three self-consistency attempts at 0.3, fallbacks answer directly at 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverPolicy {
    /// Math questions with fewer characters than this take the fast path
    pub short_problem_chars: usize,
    /// Temperature for the single fast-path chain-of-thought
    pub fast_path_temperature: f32,
    /// Number of chain-of-thought samples in self-consistency
    pub self_consistency_attempts: usize,
    /// Temperature for self-consistency samples
    pub self_consistency_temperature: f32,
    /// Temperature for direct-answer fallbacks and direct strategies
    pub fallback_temperature: f32,
    /// Issue self-consistency samples concurrently
    pub parallel_attempts: bool,
    /// Timeout applied to every model request
    #[serde(with = "secs")]
    pub request_timeout: Duration,
}

impl Default for SolverPolicy {
    fn default() -> Self {
        Self {
            short_problem_chars: 100,
            fast_path_temperature: 0.5,
            self_consistency_attempts: 3,
            self_consistency_temperature: 0.3,
            fallback_temperature: 0.0,
            parallel_attempts: false,
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl SolverPolicy {
    // ==================== Builder Methods ====================

    pub fn with_self_consistency(mut self, attempts: usize, temperature: f32) -> Self {
        self.self_consistency_attempts = attempts;
        self.self_consistency_temperature = temperature;
        self
    }

    /// Check the policy for values the solver cannot work with
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.self_consistency_attempts == 0 {
            return Err(DomainError::NoAttempts);
        }
        for t in [
            self.fast_path_temperature,
            self.self_consistency_temperature,
            self.fallback_temperature,
        ] {
            if !(0.0..=2.0).contains(&t) {
                return Err(DomainError::InvalidTemperature(t));
            }
        }
        Ok(())
    }
}

mod secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = SolverPolicy::default();
        assert_eq!(policy.short_problem_chars, 100);
        assert_eq!(policy.fast_path_temperature, 0.5);
        assert_eq!(policy.self_consistency_attempts, 3);
        assert_eq!(policy.self_consistency_temperature, 0.3);
        assert!(!policy.parallel_attempts);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let policy = SolverPolicy::default().with_self_consistency(0, 0.3);
        assert_eq!(policy.validate(), Err(DomainError::NoAttempts));
    }

    #[test]
    fn test_out_of_range_temperature_rejected() {
        let policy = SolverPolicy::default().with_self_consistency(3, 2.5);
        assert_eq!(policy.validate(), Err(DomainError::InvalidTemperature(2.5)));
    }
}
