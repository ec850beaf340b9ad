//! Retrieval fuser errors.

use thiserror::Error;

use super::{EmbedError, IndexError, StoreError};
use crate::query::Arm;

#[derive(Debug, Error)]
pub enum FuseError {
    #[error("Query text must not be empty")]
    EmptyQuery,

    #[error("Embedding failed: {0}")]
    Embed(#[from] EmbedError),

    #[error("Vector arm failed: {0}")]
    Index(#[from] IndexError),

    #[error("Keyword arm failed: {0}")]
    Store(#[from] StoreError),

    #[error("{arm} arm timed out after {seconds}s")]
    ArmTimeout { arm: Arm, seconds: u64 },
}

impl FuseError {
    /// The retrieval arm this error belongs to.
    pub fn arm(&self) -> Option<Arm> {
        match self {
            FuseError::EmptyQuery => None,
            FuseError::Embed(_) | FuseError::Index(_) => Some(Arm::Vector),
            FuseError::Store(_) => Some(Arm::Keyword),
            FuseError::ArmTimeout { arm, .. } => Some(*arm),
        }
    }
}
