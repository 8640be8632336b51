//! Command line argument parsing for the doccat CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// doccat - a naive-Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "doccat")]
#[command(about = "An incrementally-trained naive-Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "doccat Contributors")]
#[command(long_about = None)]
pub struct DoccatArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DoccatArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the scrubbed token sequence for a document
    Scrub(ScrubArgs),

    /// Train on labeled documents, then classify an input document
    Classify(ClassifyArgs),
}

/// Arguments for the scrub command
#[derive(Parser, Debug, Clone)]
pub struct ScrubArgs {
    /// Document to scrub ("-" for stdin)
    pub input: PathBuf,
}

/// Arguments for the classify command
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Labeled training document as <class>=<file>; repeatable
    #[arg(short = 't', long = "train", value_name = "CLASS=FILE", required = true)]
    pub train: Vec<String>,

    /// Document to classify ("-" for stdin)
    pub input: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify() {
        let args = DoccatArgs::parse_from([
            "doccat", "classify", "--train", "spam=spam.txt", "--train", "ham=ham.txt", "-",
        ]);
        match args.command {
            Command::Classify(classify) => {
                assert_eq!(classify.train.len(), 2);
                assert_eq!(classify.input, PathBuf::from("-"));
            }
            _ => panic!("Expected classify command"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = DoccatArgs::parse_from(["doccat", "-vv", "scrub", "doc.txt"]);
        assert_eq!(args.verbosity(), 2);

        let args = DoccatArgs::parse_from(["doccat", "-q", "scrub", "doc.txt"]);
        assert_eq!(args.verbosity(), 0);
    }
}
