//! Naive-Bayes classification module for doccat.
//!
//! Two layers: [`model::BayesModel`] holds the word/class frequency tables
//! and the probability arithmetic; [`engine::BayesClassifier`] drives it with
//! scrubbed tokens and ranks the per-class results.

pub mod engine;
pub mod model;

// Re-export commonly used types
pub use engine::{BayesClassifier, Prediction};
pub use model::{BayesModel, PSEUDO_COUNT, VERY_UNLIKELY};
