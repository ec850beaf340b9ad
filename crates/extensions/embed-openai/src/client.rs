//! OpenAI embeddings REST client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use loanassist_protocols::{EmbedError, Embedding, EmbeddingProvider};

/// Configuration for the embeddings client.
#[derive(Debug, Clone)]
pub struct OpenAiEmbeddingConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Model to use (default: text-embedding-3-small).
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Expected embedding dimension. Responses with a different length are
    /// rejected as a dimension mismatch.
    pub dimension: usize,
}

impl OpenAiEmbeddingConfig {
    /// Create config with an API key using defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "text-embedding-3-small".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            dimension: 384,
        }
    }

    /// Use a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for compatible gateways).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the expected embedding dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }
}

/// OpenAI-compatible embedding provider.
pub struct OpenAiEmbedding {
    client: reqwest::Client,
    config: OpenAiEmbeddingConfig,
}

impl OpenAiEmbedding {
    pub fn new(config: OpenAiEmbeddingConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self::new(OpenAiEmbeddingConfig::new(api_key))
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    input: Vec<String>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
        if text.trim().is_empty() {
            return Err(EmbedError::InvalidInput(
                "cannot embed empty text".to_string(),
            ));
        }
        let embeddings = self.embed_batch(&[text]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| EmbedError::Failed("Empty response".to_string()))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let request = EmbeddingRequest {
            input: texts.iter().map(|t| t.to_string()).collect(),
            model: self.config.model.clone(),
        };

        let url = format!("{}/embeddings", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| EmbedError::Failed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EmbedError::Api { status, message });
        }

        let embedding_response: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbedError::Failed(format!("Parse error: {}", e)))?;

        let embeddings: Vec<Embedding> = embedding_response
            .data
            .into_iter()
            .map(|d| Embedding::new(d.embedding))
            .collect();

        // Catch a model/index dimensionality disagreement at the boundary
        // instead of letting every index query fail downstream.
        for embedding in &embeddings {
            if embedding.dimension != self.config.dimension {
                return Err(EmbedError::Failed(format!(
                    "model returned dimension {} but {} is configured",
                    embedding.dimension, self.config.dimension
                )));
            }
        }

        debug!("Generated {} embeddings", embeddings.len());

        Ok(embeddings)
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
