//! # doccat
//!
//! A supervised, incrementally-trained naive-Bayes text classifier.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Incremental training: feed labeled documents one at a time
//! - Flexible text analysis pipeline (symbol stripping, lowercasing,
//!   stop-word removal)
//! - Log-space probability accumulation for numerical stability
//!
//! ## Example
//!
//! ```
//! use doccat::classifier::BayesClassifier;
//!
//! let mut classifier = BayesClassifier::new().unwrap();
//! classifier.train("spam", "cheap pills and cheap watches").unwrap();
//! classifier.train("ham", "meeting agenda for the quarter").unwrap();
//!
//! let ranked = classifier.classify("cheap cheap watches").unwrap();
//! assert_eq!(ranked[0].class, "spam");
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
