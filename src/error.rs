//! Error types for hypertab operations.

use thiserror::Error;

/// Errors that can occur while normalizing or building fixtures.
///
/// Malformed table markup is never an error: spans default to 1 and empty
/// tables are skipped. Only broken internal invariants abort a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error in {pass} pass: {detail}")]
    Internal { pass: &'static str, detail: String },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
