//! JSON file storage for question sets and answer lists.

mod json_store;

pub use json_store::{JsonFileStore, load_questions};
