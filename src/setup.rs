//! Collaborator wiring.
//!
//! Builds the long-lived collaborator clients from the loaded configuration
//! and hands them to the fuser. Nothing here is read from global state.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use loanassist_config::{Config, ConfigLoader};
use loanassist_embed_openai::{OpenAiEmbedding, OpenAiEmbeddingConfig};
use loanassist_fusion::{Fuser, FuserConfig};
use loanassist_index_rest::{RestIndexConfig, RestVectorIndex};
use loanassist_protocols::EmbeddingProvider;
use loanassist_store_sqlite::SqliteKeywordStore;

/// The wired collaborator set for one process.
pub(crate) struct Collaborators {
    pub embedder: Arc<dyn EmbeddingProvider>,
    pub index: Arc<RestVectorIndex>,
    pub store: Arc<SqliteKeywordStore>,
    pub fuser: Arc<Fuser>,
}

pub(crate) fn embedder(config: &Config) -> Arc<dyn EmbeddingProvider> {
    Arc::new(OpenAiEmbedding::new(
        OpenAiEmbeddingConfig::new(&config.embedding.api_key)
            .with_model(&config.embedding.model)
            .with_base_url(&config.embedding.base_url)
            .with_dimension(config.embedding.dimension),
    ))
}

pub(crate) fn index_client(config: &Config) -> Arc<RestVectorIndex> {
    Arc::new(RestVectorIndex::new(
        RestIndexConfig::new(&config.index.base_url, &config.index.api_key)
            .with_name(&config.index.name)
            .with_dimension(config.index.dimension)
            .with_metric(&config.index.metric),
    ))
}

pub(crate) async fn store(config: &Config) -> Result<Arc<SqliteKeywordStore>> {
    let path = ConfigLoader::expand_path(&config.store.path);
    let store = SqliteKeywordStore::with_path(path)
        .await
        .context("failed to open keyword store")?;
    Ok(Arc::new(store))
}

pub(crate) async fn build(config: &Config) -> Result<Collaborators> {
    let embedder = embedder(config);
    let index = index_client(config);
    let store = store(config).await?;

    let fuser_config = FuserConfig {
        max_results: config.fusion.max_results,
        top_k: config.index.top_k,
        keyword_limit: config.store.keyword_limit,
        arm_timeout: Duration::from_secs(config.fusion.arm_timeout_seconds),
        on_arm_failure: config
            .fusion
            .on_arm_failure
            .parse()
            .map_err(|e: String| anyhow!(e))?,
    };

    let fuser = Arc::new(Fuser::new(
        embedder.clone(),
        index.clone(),
        store.clone(),
        fuser_config,
    ));

    Ok(Collaborators {
        embedder,
        index,
        store,
        fuser,
    })
}
