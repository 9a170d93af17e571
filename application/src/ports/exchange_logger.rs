//! Port for structured exchange logging.
//!
//! Defines the [`ExchangeLogger`] trait for recording every model exchange
//! (classification, strategy calls, self-consistency samples) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures full prompts
//! and responses in a machine-readable format (JSONL).

use router_domain::{ChatRequest, ModelResponse};
use serde_json::{Value, json};

/// A structured exchange event for logging.
pub struct ExchangeEvent {
    /// Event type identifier (e.g., "classify", "strategy", "self_consistency").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ExchangeEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Build an event describing one request/response pair
    pub fn exchange(
        event_type: &'static str,
        label: &str,
        request: &ChatRequest,
        response: &ModelResponse,
    ) -> Self {
        Self::new(
            event_type,
            json!({
                "label": label,
                "system": request.system,
                "prompt": request.prompt,
                "temperature": request.temperature,
                "max_tokens": request.max_tokens,
                "ok": response.ok,
                "status": response.status,
                "text": response.text,
                "error": response.error,
            }),
        )
    }
}

/// Port for logging exchange events to a structured log.
///
/// `log` is synchronous and non-fallible; logging failures are ignored.
pub trait ExchangeLogger: Send + Sync {
    fn log(&self, event: ExchangeEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoExchangeLogger;

impl ExchangeLogger for NoExchangeLogger {
    fn log(&self, _event: ExchangeEvent) {}
}
