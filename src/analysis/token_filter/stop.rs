//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! occur in English with enough frequency to be noise. The default list is
//! roughly one hundred words claimed to make up about a third of typical
//! English text, and is carried verbatim, duplicates and all.
//!
//! Matching is exact: the scrub pipeline lowercases tokens before this filter
//! runs, so the mixed-case entries in the default list (`I`, and the test
//! sentinels `ZZwater` / `ZZoil`) never match anything and pass their
//! lowercase forms through.
//!
//! # Examples
//!
//! ```
//! use doccat::analysis::token_filter::Filter;
//! use doccat::analysis::token_filter::stop::StopFilter;
//! use doccat::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses the default common-words list
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default common-words list.
///
/// `ZZwater` and `ZZoil` are literal sentinel entries used only to test
/// discrimination; keep them as-is.
const DEFAULT_COMMON_WORDS: &[&str] = &[
    "the", "of", "an", "a", "to", "in", "is", "you", "that", "it", "he", "was", "for", "on", "are",
    "as", "with", "his", "they", "I", "at", "be", "this", "have", "from", "or", "one", "had", "by",
    "word", "but", "not", "what", "all", "were", "we", "when", "your", "can", "said", "there",
    "use", "an", "each", "which", "she", "do", "how", "their", "if", "will", "up", "other",
    "about", "out", "many", "then", "them", "these", "so", "some", "her", "would", "make", "like",
    "him", "into", "time", "has", "look", "two", "more", "write", "go", "see", "number", "no",
    "way", "could", "people", "my", "than", "first", "ZZwater", "been", "call", "who", "ZZoil",
    "its", "now", "find", "long", "down", "day", "did", "get", "come", "made", "may", "part",
    "this", "and",
];

/// Default common words as a HashSet.
pub static DEFAULT_COMMON_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_COMMON_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// Stop words are common words (like "the", "is", "at") that carry no class
/// signal and would otherwise dominate the frequency tables. This filter can
/// either remove stop words entirely or mark them as stopped while keeping
/// them in the stream.
///
/// # Examples
///
/// ## Custom Stop Words
///
/// ```
/// use doccat::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["custom", "words", "list"]);
/// assert!(filter.is_stop_word("custom"));
/// ```
///
/// ## Preserve Stopped Tokens
///
/// ```
/// use doccat::analysis::token_filter::Filter;
/// use doccat::analysis::token_filter::stop::StopFilter;
/// use doccat::analysis::token::Token;
///
/// // Mark as stopped but don't remove
/// let filter = StopFilter::from_words(vec!["the"]).remove_stopped(false);
/// let tokens = vec![Token::new("the", 0), Token::new("quick", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default common-words list.
    ///
    /// # Examples
    ///
    /// ```
    /// use doccat::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("hello"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_COMMON_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word. The check is an exact match.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None // Remove the token entirely
                    } else {
                        Some(token.stop()) // Mark as stopped but keep it
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
