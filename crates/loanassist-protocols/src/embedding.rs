//! Embedding types and the embedding provider contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EmbedError;

/// A fixed-length vector representation of a text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    /// Vector representation.
    pub vector: Vec<f32>,
    /// Dimension of the embedding.
    pub dimension: usize,
}

impl Embedding {
    pub fn new(vector: Vec<f32>) -> Self {
        let dimension = vector.len();
        Self { vector, dimension }
    }

    /// Compute cosine similarity with another embedding.
    ///
    /// Mismatched dimensions and zero vectors yield 0.0.
    pub fn cosine_similarity(&self, other: &Self) -> f32 {
        if self.dimension != other.dimension {
            return 0.0;
        }

        let dot: f32 = self
            .vector
            .iter()
            .zip(other.vector.iter())
            .map(|(a, b)| a * b)
            .sum();

        let norm_a: f32 = self.vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = other.vector.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot / (norm_a * norm_b)
    }
}

/// Trait for embedding backends.
///
/// Implementations must be deterministic for identical input, and their
/// reported dimension must match the vector index they are paired with.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for one text. Fails on empty input.
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedError>;

    /// Generate embeddings for multiple texts.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedError>;

    /// The fixed dimensionality of produced embeddings.
    fn dimension(&self) -> usize;
}

/// Deterministic hash-based embedding for tests (not semantic).
pub struct HashEmbedding {
    dimension: usize,
}

impl HashEmbedding {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn hash_text(&self, text: &str) -> Embedding {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut vector = vec![0.0f32; self.dimension];

        for (i, word) in text.split_whitespace().enumerate() {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            let hash = hasher.finish();

            for j in 0..self.dimension {
                let idx = (i + j) % self.dimension;
                let val = ((hash >> (j % 64)) & 0xFF) as f32 / 255.0 - 0.5;
                vector[idx] += val;
            }
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        Embedding::new(vector)
    }
}

impl Default for HashEmbedding {
    fn default() -> Self {
        // Matches the all-MiniLM-L6-v2 dimensionality used by the default
        // index configuration.
        Self::new(384)
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
        if text.trim().is_empty() {
            return Err(EmbedError::InvalidInput(
                "cannot embed empty text".to_string(),
            ));
        }
        Ok(self.hash_text(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedError> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed(text).await?);
        }
        Ok(embeddings)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
