//! Endpoint configuration from TOML (`[endpoint]` section)

use super::ConfigIssue;
use crate::gateway::EndpointConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/v1";
pub const DEFAULT_MODEL: &str = "default-model";

/// Chat completions endpoint settings.
///
/// `base_url` and `model` fall back to the environment variables named by
/// `base_url_env` / `model_env` when the files leave them unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Base URL including the API version path.
    pub base_url: Option<String>,
    /// Environment variable consulted when `base_url` is unset (default: "API_BASE").
    pub base_url_env: String,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended - use env var instead).
    pub api_key: Option<String>,
    /// Model name sent with every request.
    pub model: Option<String>,
    /// Environment variable consulted when `model` is unset (default: "MODEL_NAME").
    pub model_env: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            base_url_env: "API_BASE".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            model: None,
            model_env: "MODEL_NAME".to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileEndpointConfig {
    /// Resolve against the process environment
    pub fn resolve(&self) -> EndpointConfig {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with an explicit variable lookup.
    ///
    /// Priority per field: file value, then environment, then built-in default.
    pub fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> EndpointConfig {
        let pick = |explicit: &Option<String>, env: &str, default: &str| {
            explicit
                .clone()
                .or_else(|| lookup(env).filter(|v| !v.is_empty()))
                .unwrap_or_else(|| default.to_string())
        };

        EndpointConfig::new(
            pick(&self.base_url, &self.base_url_env, DEFAULT_BASE_URL),
            pick(&self.api_key, &self.api_key_env, ""),
            pick(&self.model, &self.model_env, DEFAULT_MODEL),
        )
        .with_timeout(self.timeout())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.base_url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            issues.push(ConfigIssue::error("endpoint.base_url", "base_url is empty"));
        }
        if self.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            issues.push(ConfigIssue::error("endpoint.model", "model name is empty"));
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "endpoint.timeout_secs",
                "timeout must be at least one second",
            ));
        }
        if self.api_key.is_some() {
            issues.push(ConfigIssue::warning(
                "endpoint.api_key",
                format!(
                    "api_key is stored in a config file; prefer ${}",
                    self.api_key_env
                ),
            ));
        }
        issues
    }
}
