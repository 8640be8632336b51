//! Text analysis module for doccat.
//!
//! This module provides the tokenization pipeline that turns raw document
//! text into classifier-ready tokens: char filtering, tokenization, token
//! filtering, and the analyzers that chain them together.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
