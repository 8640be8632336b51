//! Naive-Bayes frequency model.
//!
//! [`BayesModel`] is the statistical accumulator behind the classifier: it
//! maps words to per-class occurrence counts and classes to the totals the
//! probability estimates divide by. It holds no tokenization logic; callers
//! feed it already-scrubbed tokens one at a time.
//!
//! The model is plain mutable state. It grows monotonically (entries are
//! created lazily and never deleted), has no reset operation, and assumes a
//! single writer. Scoring methods take `&mut self` because looking up a
//! previously unseen (word, class) pair seeds its table entries, just like
//! training does.
//!
//! # Examples
//!
//! ```
//! use doccat::classifier::model::BayesModel;
//!
//! let mut model = BayesModel::new();
//! model.train(Some("cheap"), "spam");
//! model.train(Some("pills"), "spam");
//! model.train(Some("meeting"), "ham");
//!
//! assert_eq!(model.word_count("cheap", "spam"), 1);
//! assert_eq!(model.class_total("spam"), 2);
//! assert!((model.prior("spam") - 2.0 / 3.0).abs() < 1e-12);
//! ```

use ahash::AHashMap;

/// Floor substituted for any probability that evaluates to exactly zero.
///
/// A word that was never taught under a class would otherwise contribute
/// `ln(0)` to the joint score. The floor encodes "very unlikely but not
/// impossible" and keeps every logarithm finite. It skews results for
/// documents made entirely of unseen words; the ranking layer detects and
/// discards that case.
pub const VERY_UNLIKELY: f64 = 1e-10;

/// Initial weight given to a (class, word) pair on first sighting.
///
/// Applies only to the weighted per-class table, never to the raw integer
/// counts, which start at zero.
pub const PSEUDO_COUNT: f64 = 0.01;

/// Per-word statistics: occurrence counts broken down by class.
#[derive(Clone, Debug, Default)]
pub struct WordStats {
    /// How many times this word was taught under each class.
    by_class: AHashMap<String, u64>,
    /// Running sum of the per-class counts.
    total: u64,
}

/// Per-class statistics: weighted word counts and the class training total.
#[derive(Clone, Debug, Default)]
pub struct ClassStats {
    /// Pseudo-count-seeded weight per word. Maintained for parity with the
    /// reference statistics but read by no scoring path.
    weights: AHashMap<String, f64>,
    /// Total token-occurrences taught under this class.
    total: u64,
}

/// Word/class frequency tables with naive-Bayes scoring.
#[derive(Clone, Debug, Default)]
pub struct BayesModel {
    /// word -> per-class counts
    words: AHashMap<String, WordStats>,
    /// class -> weighted word counts
    classes: AHashMap<String, ClassStats>,
    /// Classes in first-sighting order. Gives ranking a stable enumeration
    /// order for tie-breaking.
    class_order: Vec<String>,
    /// Global count of training events across all classes.
    total: u64,
}

impl BayesModel {
    /// Create a fresh model with zero classes and zero words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure table entries exist for the given word and class.
    ///
    /// First touch of a (word, class) pair seeds the raw count at 0 and the
    /// weighted count at [`PSEUDO_COUNT`]. Idempotent across repeated calls.
    fn sanitize(&mut self, word: Option<&str>, class: &str) {
        if !self.classes.contains_key(class) {
            self.classes.insert(class.to_string(), ClassStats::default());
            self.class_order.push(class.to_string());
        }

        if let Some(word) = word {
            self.words
                .entry(word.to_string())
                .or_default()
                .by_class
                .entry(class.to_string())
                .or_insert(0);
            if let Some(stats) = self.classes.get_mut(class) {
                stats.weights.entry(word.to_string()).or_insert(PSEUDO_COUNT);
            }
        }
    }

    /// Record one occurrence of `word` under `class`.
    ///
    /// Increments the raw count, the word total, the class weight, the class
    /// total and the global total by exactly one each, seeding missing table
    /// entries first. Passing `None` is a "touch": it only ensures the class
    /// exists in the class table, so a prior can be computed for a class that
    /// has never been trained.
    pub fn train(&mut self, word: Option<&str>, class: &str) {
        self.sanitize(word, class);
        let Some(word) = word else {
            return;
        };

        if let Some(stats) = self.words.get_mut(word) {
            if let Some(count) = stats.by_class.get_mut(class) {
                *count += 1;
            }
            stats.total += 1;
        }
        if let Some(stats) = self.classes.get_mut(class) {
            if let Some(weight) = stats.weights.get_mut(word) {
                *weight += 1.0;
            }
            stats.total += 1;
        }
        self.total += 1;
    }

    /// p(C): the unconditional probability of a class from training frequency.
    ///
    /// Defined as 0.0 on a model with no training events at all, so an
    /// untrained (merely touched) class never divides by zero.
    pub fn prior(&mut self, class: &str) -> f64 {
        self.sanitize(None, class);
        if self.total == 0 {
            return 0.0;
        }
        let class_total = self.classes.get(class).map(|c| c.total).unwrap_or(0);
        class_total as f64 / self.total as f64
    }

    /// p(w|C): how often `word` was taught under `class`, relative to all
    /// tokens taught under `class`.
    ///
    /// A result of exactly zero (unseen pair, or a class with no training) is
    /// replaced by [`VERY_UNLIKELY`].
    pub fn probability_of_word_given_class(&mut self, word: &str, class: &str) -> f64 {
        self.sanitize(Some(word), class);
        let class_total = self.classes.get(class).map(|c| c.total).unwrap_or(0);
        if class_total == 0 {
            return VERY_UNLIKELY;
        }
        let count = self
            .words
            .get(word)
            .and_then(|w| w.by_class.get(class))
            .copied()
            .unwrap_or(0);
        let prob = count as f64 / class_total as f64;
        if prob == 0.0 { VERY_UNLIKELY } else { prob }
    }

    /// p(C|D): the joint log-probability of observing all `tokens` under
    /// `class`, plus the log of the class prior.
    ///
    /// Accumulates the sum of natural logarithms of the per-token conditional
    /// probabilities rather than their product: for long documents a running
    /// product of many small probabilities underflows to zero, while the
    /// log-sum stays exact. The returned value is an unnormalized score, not
    /// a probability.
    ///
    /// An empty token sequence scores as the log prior alone. A zero prior is
    /// floored to [`VERY_UNLIKELY`] before the logarithm, the same
    /// substitution used for word probabilities.
    pub fn log_probability_of_class_given_document(
        &mut self,
        tokens: &[String],
        class: &str,
    ) -> f64 {
        let mut prob = 0.0;
        for token in tokens {
            prob += self.probability_of_word_given_class(token, class).ln();
        }
        let mut prior = self.prior(class);
        if prior == 0.0 {
            prior = VERY_UNLIKELY;
        }
        prob + prior.ln()
    }

    /// Known classes, in first-sighting order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_order.iter().map(|s| s.as_str())
    }

    /// Number of known classes.
    pub fn class_count(&self) -> usize {
        self.class_order.len()
    }

    /// Number of distinct words ever sighted.
    pub fn vocabulary_size(&self) -> usize {
        self.words.len()
    }

    /// Raw occurrence count for a (word, class) pair.
    pub fn word_count(&self, word: &str, class: &str) -> u64 {
        self.words
            .get(word)
            .and_then(|w| w.by_class.get(class))
            .copied()
            .unwrap_or(0)
    }

    /// Total occurrences of a word across all classes.
    pub fn word_total(&self, word: &str) -> u64 {
        self.words.get(word).map(|w| w.total).unwrap_or(0)
    }

    /// Total token-occurrences taught under a class.
    pub fn class_total(&self, class: &str) -> u64 {
        self.classes.get(class).map(|c| c.total).unwrap_or(0)
    }

    /// Weighted count for a (class, word) pair, if the pair was ever sighted.
    ///
    /// The weighted table is seeded at [`PSEUDO_COUNT`] and incremented in
    /// step with the raw counts but is not consulted by scoring; it is
    /// exposed for inspection.
    pub fn class_weight(&self, class: &str, word: &str) -> Option<f64> {
        self.classes.get(class).and_then(|c| c.weights.get(word)).copied()
    }

    /// Global count of training events across all classes.
    pub fn training_total(&self) -> u64 {
        self.total
    }

    /// True if the model has never been trained or touched.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.words.is_empty()
    }
}
