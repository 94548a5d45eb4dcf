//! Model errors
//!
//! `StartupError` is fatal: the process must not serve predictions after one.
//! `InferenceError` is a per-request scoring failure.

use thiserror::Error;

use crate::logic::features::SchemaMismatch;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Model checksum mismatch for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid model metadata {path}: {reason}")]
    InvalidMetadata { path: String, reason: String },

    #[error("Failed to load model: {0}")]
    Runtime(String),

    #[error("Model declares {0} inputs, expected a single feature tensor")]
    UnsupportedInputs(usize),

    #[error("Model input '{name}' cannot take the feature row: {reason}")]
    IncompatibleInput { name: String, reason: String },

    #[error(transparent)]
    Schema(#[from] SchemaMismatch),
}

#[derive(Debug, Error)]
#[error("InferenceError: {0}")]
pub struct InferenceError(pub String);
