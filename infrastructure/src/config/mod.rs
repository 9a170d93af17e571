//! Configuration file loading for answer-router
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ANSWER_ROUTER_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./answer-router.toml` or `./.answer-router.toml`
//! 4. Global: `~/.config/answer-router/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileBatchConfig, FileConfig, FileEndpointConfig, FileSolverConfig, Severity,
};
pub use loader::{ConfigError, ConfigLoader};
