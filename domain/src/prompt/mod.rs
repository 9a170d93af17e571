//! Prompt domain
//!
//! System instructions and user prompts for the classifier and each strategy.

mod template;

pub use template::PromptTemplate;
