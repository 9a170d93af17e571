//! Application-level configuration.
//!
//! - [`BatchParams`] - answer-file validation and evaluation limits
//!
//! Routing knobs live in the domain as [`router_domain::SolverPolicy`].

pub mod batch_params;

pub use batch_params::BatchParams;
