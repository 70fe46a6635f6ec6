//! Error types for training, evaluation and data loading.

use thiserror::Error;

/// Errors that can occur while building, training or evaluating a network.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Network weights and biases must be initialized; train the network first")]
    NotInitialized,

    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    #[error("Failed to load data from {path}: {message}")]
    DataLoad { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
