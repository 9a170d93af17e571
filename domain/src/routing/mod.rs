//! Routing domain
//!
//! - [`strategy::Strategy`] - single-call prompting strategies
//! - [`policy::SolverPolicy`] - thresholds, temperatures and attempt counts
//! - [`plan::RoutePlan`] - the route chosen for one question
//! - [`outcome::SolveOutcome`] - an answer plus the route that produced it

pub mod outcome;
pub mod plan;
pub mod policy;
pub mod strategy;

pub use outcome::SolveOutcome;
pub use plan::{MathPath, RoutePlan};
pub use policy::SolverPolicy;
pub use strategy::Strategy;
