//! Error types for the doccat library.
//!
//! All errors are represented by the [`DoccatError`] enum. The classifier core
//! itself never fails in normal operation (degenerate probabilities are
//! substituted, not raised), so errors come from the edges: I/O in the CLI,
//! JSON serialization of results.
//!
//! # Examples
//!
//! ```
//! use doccat::error::{DoccatError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DoccatError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for doccat operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum DoccatError {
    /// I/O errors (reading training or input documents)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Classifier-related errors (training, scoring)
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with DoccatError.
pub type Result<T> = std::result::Result<T, DoccatError>;

impl DoccatError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DoccatError::Analysis(msg.into())
    }

    /// Create a new classifier error.
    pub fn classifier<S: Into<String>>(msg: S) -> Self {
        DoccatError::Classifier(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DoccatError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DoccatError::Other(msg.into())
    }
}
