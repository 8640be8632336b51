//! Scrub analyzer: the fixed pipeline the classifier trains and scores with.
//!
//! # Pipeline
//!
//! 1. SymbolStripCharFilter (deletes the fixed ASCII symbol set)
//! 2. WhitespaceTokenizer (splits on whitespace runs, never emits empties)
//! 3. LowercaseFilter
//! 4. StopFilter (default common-words list)
//!
//! Token order is reproducible, and re-scrubbing already-scrubbed text yields
//! the same token sequence.
//!
//! # Examples
//!
//! ```
//! use doccat::analysis::analyzer::analyzer::Analyzer;
//! use doccat::analysis::analyzer::scrub::ScrubAnalyzer;
//!
//! let analyzer = ScrubAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("The Water, is ZZwater!").unwrap().collect();
//!
//! // "the" and "is" are stop words; the sentinel token survives lowercased.
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "water");
//! assert_eq!(tokens[1].text, "zzwater");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::symbol_strip::SymbolStripCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// The standard analyzer for classifier input.
pub struct ScrubAnalyzer {
    inner: PipelineAnalyzer,
}

impl ScrubAnalyzer {
    /// Create a new scrub analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(SymbolStripCharFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .with_name("scrub".to_string());

        Ok(ScrubAnalyzer { inner: analyzer })
    }

    /// Create a new scrub analyzer without stop word filtering.
    pub fn without_stop_words() -> Result<Self> {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(SymbolStripCharFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("scrub_no_stop".to_string());

        Ok(ScrubAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for ScrubAnalyzer {
    fn default() -> Self {
        Self::new().expect("Scrub analyzer should be creatable with default settings")
    }
}

impl Analyzer for ScrubAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "scrub"
    }
}

impl std::fmt::Debug for ScrubAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrubAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
