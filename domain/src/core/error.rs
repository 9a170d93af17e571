//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The routing policy itself never fails; these cover invalid policy
/// values supplied from configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Self-consistency needs at least one attempt")]
    NoAttempts,

    #[error("Temperature {0} is outside the supported range 0.0..=2.0")]
    InvalidTemperature(f32),
}
