//! Chat exchange value objects
//!
//! - [`ChatRequest`] - one system + user prompt pair with sampling settings
//! - [`ModelResponse`] - the outcome of that exchange, success or failure

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default output budget for short answers
pub const DEFAULT_MAX_TOKENS: u32 = 128;

/// Status used when no HTTP status is available (network error, timeout)
pub const TRANSPORT_FAILURE_STATUS: i32 = -1;

/// A single chat-completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

impl ChatRequest {
    /// Create a request with default temperature (0.0), budget and timeout
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            temperature: 0.0,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Result of one chat exchange
///
/// Failures are values, not errors: transport problems and non-200
/// statuses arrive as `ok == false` with a diagnostic in `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub status: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModelResponse {
    /// A successful response (status 200)
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            ok: true,
            text: Some(text.into()),
            status: 200,
            error: None,
        }
    }

    /// A failed response with an HTTP status
    pub fn failure(status: i32, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            text: None,
            status,
            error: Some(error.into()),
        }
    }

    /// A failure that never produced an HTTP status
    pub fn transport_failure(error: impl Into<String>) -> Self {
        Self::failure(TRANSPORT_FAILURE_STATUS, error)
    }

    /// Response text, or the empty string when absent
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Trimmed response text, treating a missing body as empty
    pub fn trimmed_text(&self) -> String {
        self.text_or_empty().trim().to_string()
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Ok(Duration::from_secs_f64(secs.max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req = ChatRequest::new("sys", "hi");
        assert_eq!(req.temperature, 0.0);
        assert_eq!(req.max_tokens, 128);
        assert_eq!(req.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_request_builders() {
        let req = ChatRequest::new("sys", "hi")
            .with_temperature(0.7)
            .with_max_tokens(512)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(req.temperature, 0.7);
        assert_eq!(req.max_tokens, 512);
        assert_eq!(req.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_failure_has_no_text() {
        let resp = ModelResponse::failure(500, "boom");
        assert!(!resp.ok);
        assert_eq!(resp.text, None);
        assert_eq!(resp.text_or_empty(), "");
        assert_eq!(resp.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_transport_failure_status() {
        let resp = ModelResponse::transport_failure("connection refused");
        assert_eq!(resp.status, -1);
    }

    #[test]
    fn test_trimmed_text() {
        assert_eq!(ModelResponse::success("  C \n").trimmed_text(), "C");
    }

    #[test]
    fn test_request_serializes_timeout_as_seconds() {
        let json = serde_json::to_value(ChatRequest::new("s", "p")).unwrap();
        assert_eq!(json["timeout"], serde_json::json!(60.0));
    }
}
