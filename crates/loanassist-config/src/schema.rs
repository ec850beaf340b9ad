//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub embedding: EmbeddingConfig,

    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub fusion: FusionConfig,
}

/// HTTP front door configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory for rolling request logs. Console-only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_dir: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Embedding backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    #[serde(default = "default_embedding_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// Must agree with `index.dimension` or every query fails.
    #[serde(default = "default_dimension")]
    pub dimension: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: default_embedding_base_url(),
            api_key: String::new(),
            model: default_embedding_model(),
            dimension: default_dimension(),
        }
    }
}

fn default_embedding_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_dimension() -> usize {
    384
}

/// Vector index service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default)]
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_index_name")]
    pub name: String,

    #[serde(default = "default_dimension")]
    pub dimension: usize,

    #[serde(default = "default_metric")]
    pub metric: String,

    /// Nearest neighbors fetched per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            name: default_index_name(),
            dimension: default_dimension(),
            metric: default_metric(),
            top_k: default_top_k(),
        }
    }
}

fn default_index_name() -> String {
    "loan-ai-index".to_string()
}

fn default_metric() -> String {
    "cosine".to_string()
}

fn default_top_k() -> usize {
    3
}

/// Keyword store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite database path; `:memory:` for an ephemeral store.
    #[serde(default = "default_store_path")]
    pub path: String,

    /// Cap on keyword lookups.
    #[serde(default = "default_keyword_limit")]
    pub keyword_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            keyword_limit: default_keyword_limit(),
        }
    }
}

fn default_store_path() -> String {
    "loanassist.db".to_string()
}

fn default_keyword_limit() -> usize {
    10
}

/// Result fusion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Cap on fused results returned to the caller.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Per-arm timeout in seconds.
    #[serde(default = "default_arm_timeout")]
    pub arm_timeout_seconds: u64,

    /// What to do when one retrieval arm fails: "fail" aborts the request,
    /// "degrade" returns the healthy arm's results.
    #[serde(default = "default_on_arm_failure")]
    pub on_arm_failure: String,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            arm_timeout_seconds: default_arm_timeout(),
            on_arm_failure: default_on_arm_failure(),
        }
    }
}

fn default_max_results() -> usize {
    3
}

fn default_arm_timeout() -> u64 {
    10
}

fn default_on_arm_failure() -> String {
    "fail".to_string()
}
