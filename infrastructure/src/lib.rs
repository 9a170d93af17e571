//! Infrastructure layer for answer-router
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileBatchConfig, FileConfig, FileEndpointConfig,
    FileSolverConfig, Severity,
};
pub use gateway::{EndpointConfig, OpenAiChatGateway};
pub use logging::JsonlExchangeLogger;
pub use storage::{JsonFileStore, load_questions};
