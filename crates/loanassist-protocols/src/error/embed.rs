//! Embedding backend errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Embedding failed: {0}")]
    Failed(String),

    #[error("Invalid embedding input: {0}")]
    InvalidInput(String),

    #[error("Embedding API error {status}: {message}")]
    Api { status: u16, message: String },
}
