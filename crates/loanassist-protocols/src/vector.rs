//! Vector index protocol definitions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::qa::Metadata;

/// Core trait for approximate nearest-neighbor index backends.
///
/// Queries return matches ordered by descending cosine similarity.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Query the index for the `top_k` nearest neighbors of `vector`.
    ///
    /// When `include_metadata` is set, each match echoes the metadata
    /// stored at ingestion time.
    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<ScoredMatch>, IndexError>;

    /// Insert or overwrite vectors.
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<(), IndexError>;

    /// The index's configured dimensionality.
    fn dimension(&self) -> usize;
}

/// One nearest-neighbor match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    /// Vector ID.
    pub id: String,

    /// Cosine similarity in [0, 1] for normalized embeddings.
    pub score: f32,

    /// Metadata echoed from ingestion, present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A vector with its metadata, as stored in the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    #[serde(default)]
    pub metadata: Metadata,
}
