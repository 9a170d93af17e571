//! Presentation layer for answer-router
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and answer-file inspection views.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::inspect::{AnswerView, inspect, sample};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
