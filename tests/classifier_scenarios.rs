//! End-to-end scenarios for the doccat classifier public API.

use doccat::analysis::analyzer::analyzer::Analyzer;
use doccat::analysis::analyzer::scrub::ScrubAnalyzer;
use doccat::classifier::{BayesClassifier, BayesModel, VERY_UNLIKELY};

fn scrub(text: &str) -> Vec<String> {
    let analyzer = ScrubAnalyzer::new().unwrap();
    analyzer
        .analyze(text)
        .unwrap()
        .map(|token| token.text)
        .collect()
}

#[test]
fn scrub_normalizes_case_punctuation_and_stop_words() {
    assert_eq!(scrub("The Water, is ZZwater!"), vec!["water", "zzwater"]);
}

#[test]
fn scrub_is_idempotent_on_scrubbed_text() {
    let once = scrub("Shaken, NOT stirred; olives on the side!");
    let again = scrub(&once.join(" "));
    assert_eq!(once, again);
}

#[test]
fn word_counts_track_training_exactly() {
    let mut classifier = BayesClassifier::new().unwrap();
    for _ in 0..4 {
        classifier.train("spam", "cheap watches").unwrap();
    }

    let model = classifier.model();
    assert_eq!(model.word_count("cheap", "spam"), 4);
    assert_eq!(model.word_count("watches", "spam"), 4);
    assert_eq!(model.class_total("spam"), 8);
    assert_eq!(model.training_total(), 8);
}

#[test]
fn priors_follow_training_volume() {
    let mut classifier = BayesClassifier::new().unwrap();
    // Three documents for spam, one for ham.
    classifier.train("spam", "cheap pills today").unwrap();
    classifier.train("spam", "winner winner prize").unwrap();
    classifier.train("spam", "act fast offer").unwrap();
    classifier.train("ham", "quarterly report attached").unwrap();

    // 9 spam tokens, 3 ham tokens.
    let model = classifier.model();
    assert_eq!(model.class_total("spam"), 9);
    assert_eq!(model.class_total("ham"), 3);

    let mut model: BayesModel = model.clone();
    assert!((model.prior("spam") - 0.75).abs() < 1e-12);
    assert!((model.prior("ham") - 0.25).abs() < 1e-12);
}

#[test]
fn unseen_words_are_floored_not_fatal() {
    let mut classifier = BayesClassifier::new().unwrap();
    classifier.train("spam", "cheap pills").unwrap();
    classifier.train("ham", "board meeting").unwrap();

    let mut model = classifier.model().clone();
    assert_eq!(
        model.probability_of_word_given_class("xylophone", "spam"),
        VERY_UNLIKELY
    );

    // Classifying an all-novel document must not fail either.
    let predictions = classifier.classify("xylophone zygote").unwrap();
    assert_eq!(predictions.len(), 2);
}

#[test]
fn all_novel_document_collapses_to_zero_probabilities() {
    let mut classifier = BayesClassifier::new().unwrap();
    classifier.train("spam", "cheap pills winner prize").unwrap();
    classifier.train("ham", "meeting agenda review notes").unwrap();

    let predictions = classifier
        .classify("quasar bumblebee xylophone zygote")
        .unwrap();

    assert_eq!(predictions.len(), 2);
    for prediction in &predictions {
        assert_eq!(prediction.probability, 0.0);
    }
    let mut classes: Vec<&str> = predictions.iter().map(|p| p.class.as_str()).collect();
    classes.sort_unstable();
    assert_eq!(classes, vec!["ham", "spam"]);
}

#[test]
fn strongly_associated_class_ranks_first() {
    let mut classifier = BayesClassifier::new().unwrap();
    classifier
        .train("spam", "cheap cheap cheap pills pills winner prize offer")
        .unwrap();
    classifier
        .train("ham", "project meeting agenda minutes review schedule")
        .unwrap();

    let predictions = classifier.classify("cheap pills cheap offer").unwrap();

    assert_eq!(predictions[0].class, "spam");
    assert!(predictions[0].probability > predictions[1].probability);
    // Only ordering is guaranteed; the logistic pseudo-probabilities need not
    // sum to 1 across classes.
}

#[test]
fn untrained_classifier_returns_empty_distribution() {
    let mut classifier = BayesClassifier::new().unwrap();
    assert!(classifier.classify("whatever text").unwrap().is_empty());
}

#[test]
fn models_are_independent() {
    let mut a = BayesClassifier::new().unwrap();
    let mut b = BayesClassifier::new().unwrap();
    a.train("spam", "cheap pills").unwrap();
    b.train("news", "election results").unwrap();

    assert_eq!(a.model().class_count(), 1);
    assert_eq!(b.model().class_count(), 1);
    assert_eq!(a.model().word_count("election", "news"), 0);
}
