//! Chat gateway adapters.

mod openai;

pub use openai::{EndpointConfig, OpenAiChatGateway};
