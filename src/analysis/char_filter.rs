//! Char filter implementations for text normalization.
//!
//! This module provides filters that pre-process the text string before it is
//! passed to the tokenizer. The classifier never maps tokens back to source
//! offsets, so char filters return the rewritten text alone.
//!
//! # Available Filters
//!
//! - [`symbol_strip::SymbolStripCharFilter`] - Deletes a fixed ASCII symbol set
//!
//! # Examples
//!
//! ```
//! use doccat::analysis::char_filter::CharFilter;
//! use doccat::analysis::char_filter::symbol_strip::SymbolStripCharFilter;
//!
//! let filter = SymbolStripCharFilter::new();
//! assert_eq!(filter.filter("hello, world!"), "hello world");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod symbol_strip;

pub use symbol_strip::SymbolStripCharFilter;
