//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into the explicit records
//! the other layers take: [`EndpointConfig`](crate::EndpointConfig),
//! [`SolverPolicy`](router_domain::SolverPolicy) and
//! [`BatchParams`](router_application::BatchParams).

mod batch;
mod endpoint;
mod solver;

pub use batch::FileBatchConfig;
pub use endpoint::FileEndpointConfig;
pub use solver::FileSolverConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected problem in the loaded configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending field, e.g. `solver.self_consistency_attempts`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub(crate) fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat completions endpoint
    pub endpoint: FileEndpointConfig,
    /// Routing and math-solving knobs
    pub solver: FileSolverConfig,
    /// Batch generation and evaluation
    pub batch: FileBatchConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.endpoint.validate());
        issues.extend(self.solver.validate());
        issues.extend(self.batch.validate());
        issues
    }

    /// Whether any issue is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
