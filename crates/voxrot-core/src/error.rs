//! Error types for voxrot-core.

use thiserror::Error;

/// The main error type for storage-layer operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// An array with the given name was not found.
    #[error("array '{0}' not found")]
    ArrayNotFound(String),

    /// Scalar type or component count mismatch between two arrays.
    #[error("scalar type or component mismatch on array '{array}'")]
    TypeMismatch { array: String },
}

/// A specialized Result type for voxrot-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
