//! Answer extraction and aggregation
//!
//! Candidates are carried as string tokens throughout: gold answers are
//! arbitrary text even though the integer extractor only produces digits.

pub mod extract;
pub mod tally;

pub use extract::extract_integer;
pub use tally::FrequencyTally;
