//! Symbol stripping char filter.
//!
//! Deletes a fixed set of ASCII punctuation and symbol characters from the
//! text before tokenization. Characters are removed outright, not replaced by
//! spaces, so `"don't"` becomes `"dont"` rather than `"don t"`.
//!
//! The input is assumed to be 7-bit ASCII; other characters pass through
//! untouched.
//!
//! # Examples
//!
//! ```
//! use doccat::analysis::char_filter::CharFilter;
//! use doccat::analysis::char_filter::symbol_strip::SymbolStripCharFilter;
//!
//! let filter = SymbolStripCharFilter::new();
//! assert_eq!(filter.filter("a+b=c, right?"), "abc right");
//! ```

use crate::analysis::char_filter::CharFilter;

/// The punctuation and symbol characters stripped from all text.
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()-+_=[]{}\\|;':\",.<>/?~`";

/// A char filter that deletes a fixed set of symbol characters.
#[derive(Clone, Debug)]
pub struct SymbolStripCharFilter {
    symbols: Vec<char>,
}

impl SymbolStripCharFilter {
    /// Create a new symbol strip filter with the default symbol set.
    pub fn new() -> Self {
        Self::with_symbols(DEFAULT_SYMBOLS)
    }

    /// Create a new symbol strip filter with a custom symbol set.
    pub fn with_symbols(symbols: &str) -> Self {
        SymbolStripCharFilter {
            symbols: symbols.chars().collect(),
        }
    }

    /// Check if a character is in the stripped set.
    pub fn is_symbol(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }
}

impl Default for SymbolStripCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for SymbolStripCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|c| !self.is_symbol(*c)).collect()
    }

    fn name(&self) -> &'static str {
        "symbol_strip"
    }
}
