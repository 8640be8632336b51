//! Analyzer implementations that combine char filters, tokenizers and filters.

pub mod analyzer;
pub mod pipeline;
pub mod scrub;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use scrub::ScrubAnalyzer;
