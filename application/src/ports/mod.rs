//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod answer_store;
pub mod exchange_logger;
pub mod llm_gateway;
pub mod progress;
