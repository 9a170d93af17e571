//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod classify_question;
pub mod evaluate;
pub mod generate_answers;
pub mod run_strategy;
pub mod self_consistency;
pub mod solve_question;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
