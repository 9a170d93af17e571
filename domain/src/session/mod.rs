//! Model exchange domain
//!
//! Value objects for one request/response exchange with a chat-completion
//! endpoint. Transport concerns live in the infrastructure layer.

pub mod exchange;

pub use exchange::{ChatRequest, ModelResponse};
