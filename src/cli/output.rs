//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classifier::Prediction;
use crate::cli::args::{DoccatArgs, OutputFormat};
use crate::error::Result;

/// Result structure for the scrub command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScrubResults {
    pub tokens: Vec<String>,
}

/// Result structure for the classify command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResults {
    pub predictions: Vec<Prediction>,
    pub classes_trained: usize,
    pub tokens_trained: usize,
    pub duration_ms: u64,
}

/// Render a result either as JSON or as a human-readable block, honoring the
/// global format and verbosity flags.
pub fn output_result<T: Serialize + HumanDisplay>(
    message: &str,
    result: &T,
    cli_args: &DoccatArgs,
) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => {
            let json = if cli_args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
        OutputFormat::Human => {
            if cli_args.verbosity() > 0 {
                println!("{message}");
            }
            print!("{}", result.human());
        }
    }
    Ok(())
}

/// Human-readable rendering for CLI result structures.
pub trait HumanDisplay {
    fn human(&self) -> String;
}

impl HumanDisplay for ScrubResults {
    fn human(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(token);
            out.push('\n');
        }
        out
    }
}

impl HumanDisplay for ClassifyResults {
    fn human(&self) -> String {
        let mut out = String::new();
        for prediction in &self.predictions {
            out.push_str(&format!(
                "{}({})\n",
                prediction.class, prediction.probability
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_human_output() {
        let results = ScrubResults {
            tokens: vec!["water".to_string(), "zzwater".to_string()],
        };
        assert_eq!(results.human(), "water\nzzwater\n");
    }

    #[test]
    fn test_classify_human_output() {
        let results = ClassifyResults {
            predictions: vec![
                Prediction {
                    class: "spam".to_string(),
                    probability: 1.0,
                },
                Prediction {
                    class: "ham".to_string(),
                    probability: 0.0,
                },
            ],
            classes_trained: 2,
            tokens_trained: 10,
            duration_ms: 1,
        };
        assert_eq!(results.human(), "spam(1)\nham(0)\n");
    }

    #[test]
    fn test_classify_json_roundtrip() {
        let results = ClassifyResults {
            predictions: vec![Prediction {
                class: "spam".to_string(),
                probability: 0.5,
            }],
            classes_trained: 1,
            tokens_trained: 4,
            duration_ms: 0,
        };
        let json = serde_json::to_string(&results).unwrap();
        let back: ClassifyResults = serde_json::from_str(&json).unwrap();
        assert_eq!(back.predictions.len(), 1);
        assert_eq!(back.predictions[0].class, "spam");
    }
}
