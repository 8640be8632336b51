//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis in doccat. Analyzers combine char filters, tokenizers and token
//! filters to transform raw text into classifier-ready tokens.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Classifier
//!             ↓
//!        Char Filters
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`ScrubAnalyzer`](super::scrub::ScrubAnalyzer) - The fixed classifier pipeline
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom chains
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use doccat::analysis::analyzer::analyzer::Analyzer;
//! use doccat::analysis::token::TokenStream;
//! use doccat::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so an analyzer can be shared behind an
/// `Arc` by anything that wraps the classifier.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This is the main method that performs the complete analysis pipeline,
    /// including char filtering, tokenization and all configured filters.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
