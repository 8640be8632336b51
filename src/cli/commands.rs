//! Command implementations for the doccat CLI.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::classifier::BayesClassifier;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{DoccatError, Result};

/// Execute a CLI command.
pub fn execute_command(args: DoccatArgs) -> Result<()> {
    match &args.command {
        Command::Scrub(scrub_args) => scrub_document(scrub_args.clone(), &args),
        Command::Classify(classify_args) => classify_document(classify_args.clone(), &args),
    }
}

/// Print the scrubbed token sequence for a document.
fn scrub_document(args: ScrubArgs, cli_args: &DoccatArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let classifier = BayesClassifier::new()?;
    let tokens = classifier.scrub(&text)?;

    output_result("Scrubbed tokens", &ScrubResults { tokens }, cli_args)
}

/// Train a model from the labeled files, then classify the input document.
fn classify_document(args: ClassifyArgs, cli_args: &DoccatArgs) -> Result<()> {
    let start = Instant::now();
    let mut classifier = BayesClassifier::new()?;

    let mut tokens_trained = 0;
    for spec in &args.train {
        let (class, path) = parse_labeled_spec(spec)?;
        if cli_args.verbosity() > 1 {
            println!("Training class '{class}' from: {path}");
        }
        let text = read_input(Path::new(path))?;
        tokens_trained += classifier.train(class, &text)?;
    }

    let text = read_input(&args.input)?;
    let predictions = classifier.classify(&text)?;

    output_result(
        "Classification",
        &ClassifyResults {
            predictions,
            classes_trained: classifier.model().class_count(),
            tokens_trained,
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Split a `<class>=<file>` training spec.
fn parse_labeled_spec(spec: &str) -> Result<(&str, &str)> {
    match spec.split_once('=') {
        Some((class, path)) if !class.is_empty() && !path.is_empty() => Ok((class, path)),
        _ => Err(DoccatError::invalid_argument(format!(
            "training spec must be <class>=<file>, got '{spec}'"
        ))),
    }
}

/// Read a document from a file, or from stdin when the path is "-".
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labeled_spec() {
        let (class, path) = parse_labeled_spec("spam=mail/spam.txt").unwrap();
        assert_eq!(class, "spam");
        assert_eq!(path, "mail/spam.txt");
    }

    #[test]
    fn test_parse_labeled_spec_rejects_malformed() {
        assert!(parse_labeled_spec("spam").is_err());
        assert!(parse_labeled_spec("=file.txt").is_err());
        assert!(parse_labeled_spec("spam=").is_err());
    }
}
