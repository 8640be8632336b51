//! Classifier engine: analyzer plus model, with ranking.
//!
//! [`BayesClassifier`] couples a scrub [`Analyzer`] with a [`BayesModel`] and
//! exposes the document-level operations: train on labeled text, classify
//! unseen text into a ranked probability distribution over the known classes.
//!
//! # Examples
//!
//! ```
//! use doccat::classifier::engine::BayesClassifier;
//!
//! let mut classifier = BayesClassifier::new().unwrap();
//! classifier.train("spam", "cheap pills, cheap watches, act fast").unwrap();
//! classifier.train("ham", "quarterly meeting rescheduled, agenda attached").unwrap();
//!
//! let predictions = classifier.classify("cheap watches").unwrap();
//! assert_eq!(predictions[0].class, "spam");
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::scrub::ScrubAnalyzer;
use crate::classifier::model::BayesModel;
use crate::error::Result;

/// One entry of a ranked classification result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The class name.
    pub class: String,
    /// Pseudo-probability from the logistic renormalization. Roughly in
    /// [0, 1]; not guaranteed to sum to 1 across classes.
    pub probability: f64,
}

/// A trainable naive-Bayes document classifier.
///
/// Owns the model; the analyzer is shared. Training and classification both
/// mutate the model (classification seeds table entries for unseen words), so
/// both take `&mut self`. Wrap the whole classifier in an external lock if it
/// must be shared across threads.
pub struct BayesClassifier {
    analyzer: Arc<dyn Analyzer>,
    model: BayesModel,
}

impl BayesClassifier {
    /// Create a classifier with the default scrub pipeline.
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(ScrubAnalyzer::new()?)))
    }

    /// Create a classifier with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        BayesClassifier {
            analyzer,
            model: BayesModel::new(),
        }
    }

    /// Scrub `text` and record every resulting token under `class`.
    ///
    /// Returns the number of tokens trained.
    pub fn train(&mut self, class: &str, text: &str) -> Result<usize> {
        let tokens = self.scrub(text)?;
        for token in &tokens {
            self.model.train(Some(token), class);
        }
        Ok(tokens.len())
    }

    /// Classify a document against every known class.
    ///
    /// Returns `(class, probability)` pairs sorted descending by probability;
    /// ties keep the classes' first-sighting order. An untrained model yields
    /// an empty list. When the computed distribution is indistinguishable
    /// from the class priors (every ratio within [0.95, 1.05], the signature
    /// of a document of entirely unseen words), every probability is reported
    /// as exactly 0 instead.
    pub fn classify(&mut self, text: &str) -> Result<Vec<Prediction>> {
        let tokens = self.scrub(text)?;
        let classes: Vec<String> = self.model.classes().map(str::to_string).collect();
        if classes.is_empty() {
            return Ok(Vec::new());
        }

        let mut raw_scores = Vec::with_capacity(classes.len());
        let mut score_sum = 0.0;
        for class in &classes {
            let score = self
                .model
                .log_probability_of_class_given_document(&tokens, class);
            score_sum += score;
            raw_scores.push(score);
        }

        // The log-sum normalization trick: squeeze each raw log score into
        // [0, 1] via 1 / (1 + e^(S - 2x)). Kept verbatim; the degenerate-case
        // detector below depends on its output scale.
        let mut predictions = Vec::with_capacity(classes.len());
        let mut matches_prior = true;
        for (class, raw) in classes.into_iter().zip(raw_scores) {
            let probability = 1.0 / (1.0 + (score_sum - 2.0 * raw).exp());
            let prior = self.model.prior(&class);
            let ratio = probability / prior;
            if ratio < 0.95 || ratio > 1.05 {
                matches_prior = false;
            }
            predictions.push(Prediction { class, probability });
        }

        // A document of entirely unseen words degenerates to the prior
        // distribution; report zeros instead of the bogus near-prior values.
        if matches_prior {
            for prediction in &mut predictions {
                prediction.probability = 0.0;
            }
        }

        predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        Ok(predictions)
    }

    /// Scrub text into the token sequence the model consumes.
    pub fn scrub(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self
            .analyzer
            .analyze(text)?
            .map(|token| token.text)
            .collect();
        Ok(tokens)
    }

    /// The underlying frequency model.
    pub fn model(&self) -> &BayesModel {
        &self.model
    }

    /// The analyzer in use.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}

impl std::fmt::Debug for BayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesClassifier")
            .field("analyzer", &self.analyzer.name())
            .field("classes", &self.model.class_count())
            .field("vocabulary", &self.model.vocabulary_size())
            .finish()
    }
}
