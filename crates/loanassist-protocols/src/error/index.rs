//! Vector index errors.

use thiserror::Error;

use super::RecordError;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Index request failed: {0}")]
    RequestFailed(String),

    #[error("Index API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid index response: {0}")]
    InvalidResponse(String),

    #[error("Index not found: {0}")]
    NotFound(String),

    #[error("Embedding dimension {actual} does not match index dimension {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid record metadata: {0}")]
    InvalidRecord(#[from] RecordError),
}
