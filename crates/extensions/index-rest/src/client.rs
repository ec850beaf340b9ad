//! REST vector index client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use loanassist_protocols::{IndexError, Metadata, ScoredMatch, VectorIndex, VectorRecord};

/// Vectors per upsert request.
const UPSERT_BATCH: usize = 100;

/// Configuration for the REST index client.
#[derive(Debug, Clone)]
pub struct RestIndexConfig {
    /// Service base URL.
    pub base_url: String,
    /// API key sent in the `Api-Key` header.
    pub api_key: String,
    /// Index name.
    pub name: String,
    /// Configured index dimensionality.
    pub dimension: usize,
    /// Similarity metric used at provisioning time.
    pub metric: String,
}

impl RestIndexConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            name: "loan-ai-index".to_string(),
            dimension: 384,
            metric: "cosine".to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = metric.into();
        self
    }
}

/// Index statistics from the data plane.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub dimension: usize,
    #[serde(default)]
    pub total_vector_count: usize,
}

/// REST vector index client.
pub struct RestVectorIndex {
    client: reqwest::Client,
    config: RestIndexConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryApiRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    include_metadata: bool,
}

#[derive(Debug, Deserialize)]
struct QueryApiResponse {
    #[serde(default)]
    matches: Vec<ApiMatch>,
}

#[derive(Debug, Deserialize)]
struct ApiMatch {
    id: String,
    score: f32,
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Serialize)]
struct UpsertApiRequest<'a> {
    vectors: &'a [VectorRecord],
}

#[derive(Debug, Serialize)]
struct CreateIndexRequest<'a> {
    name: &'a str,
    dimension: usize,
    metric: &'a str,
}

#[derive(Debug, Deserialize)]
struct ListIndexesResponse {
    #[serde(default)]
    indexes: Vec<String>,
}

impl RestVectorIndex {
    pub fn new(config: RestIndexConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, IndexError> {
        let response = self
            .client
            .post(self.url(path))
            .header("Api-Key", &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| IndexError::RequestFailed(e.to_string()))?;
        Self::check_status(response).await
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, IndexError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        if status.as_u16() == 404 {
            return Err(IndexError::NotFound(message));
        }
        Err(IndexError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Fetch index statistics (dimension, vector count).
    pub async fn stats(&self) -> Result<IndexStats, IndexError> {
        let response = self
            .post_json("/describe_index_stats", &serde_json::json!({}))
            .await?;
        response
            .json()
            .await
            .map_err(|e| IndexError::InvalidResponse(e.to_string()))
    }

    /// List index names known to the control plane.
    pub async fn list(&self) -> Result<Vec<String>, IndexError> {
        let response = self
            .client
            .get(self.url("/indexes"))
            .header("Api-Key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| IndexError::RequestFailed(e.to_string()))?;
        let response = Self::check_status(response).await?;
        let list: ListIndexesResponse = response
            .json()
            .await
            .map_err(|e| IndexError::InvalidResponse(e.to_string()))?;
        Ok(list.indexes)
    }

    /// Whether the configured index exists.
    pub async fn exists(&self) -> Result<bool, IndexError> {
        Ok(self.list().await?.contains(&self.config.name))
    }

    /// Create the configured index.
    pub async fn create(&self) -> Result<(), IndexError> {
        let request = CreateIndexRequest {
            name: &self.config.name,
            dimension: self.config.dimension,
            metric: &self.config.metric,
        };
        self.post_json("/indexes", &request).await?;
        debug!(name = %self.config.name, dimension = self.config.dimension, "created index");
        Ok(())
    }

    /// Delete the configured index.
    pub async fn delete(&self) -> Result<(), IndexError> {
        let response = self
            .client
            .delete(self.url(&format!("/indexes/{}", self.config.name)))
            .header("Api-Key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| IndexError::RequestFailed(e.to_string()))?;
        Self::check_status(response).await?;
        debug!(name = %self.config.name, "deleted index");
        Ok(())
    }
}

#[async_trait]
impl VectorIndex for RestVectorIndex {
    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<ScoredMatch>, IndexError> {
        let request = QueryApiRequest {
            vector,
            top_k,
            include_metadata,
        };
        let response = self.post_json("/query", &request).await?;
        let parsed: QueryApiResponse = response
            .json()
            .await
            .map_err(|e| IndexError::InvalidResponse(e.to_string()))?;

        Ok(parsed
            .matches
            .into_iter()
            .map(|m| ScoredMatch {
                id: m.id,
                score: m.score,
                metadata: m.metadata,
            })
            .collect())
    }

    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<(), IndexError> {
        for batch in records.chunks(UPSERT_BATCH) {
            let request = UpsertApiRequest { vectors: batch };
            self.post_json("/vectors/upsert", &request).await?;
            debug!(count = batch.len(), "upserted vector batch");
        }
        Ok(())
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
