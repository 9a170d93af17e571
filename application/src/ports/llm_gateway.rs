//! Chat gateway port
//!
//! Defines the interface for one request/response exchange with a
//! chat-completion endpoint.

use async_trait::async_trait;
use router_domain::{ChatRequest, ModelResponse};
use thiserror::Error;

/// Errors raised while building a gateway.
///
/// Exchanges themselves never error; see [`ChatGateway::chat`].
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Gateway for chat-completion exchanges
///
/// This port defines how the application layer talks to the model endpoint.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Perform one exchange.
    ///
    /// Must not fail or retry: network errors, timeouts and non-200 statuses
    /// are reported as `ModelResponse { ok: false, .. }`.
    async fn chat(&self, request: &ChatRequest) -> ModelResponse;

    /// Name of the model requests are sent to
    fn model_name(&self) -> &str;
}
