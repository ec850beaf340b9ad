//! `serve` subcommand: run the HTTP front door.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::info;

use loanassist_api::{ApiConfig, ApiServer, AppState};
use loanassist_config::Config;
use loanassist_protocols::KeywordStore;

use crate::setup;

pub(crate) async fn run(config: &Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let collaborators = setup::build(config).await?;

    let state = Arc::new(AppState::new(
        collaborators.fuser,
        collaborators.store.clone(),
    ));

    let api_config = ApiConfig::new(
        host.unwrap_or_else(|| config.server.host.clone()),
        port.unwrap_or(config.server.port),
    );

    info!(
        records = collaborators.store.count().await.unwrap_or(0),
        index = %collaborators.index.name(),
        "starting loan assistant"
    );

    let server = ApiServer::new(api_config, state);
    server.run().await.map_err(|e| anyhow!("server failed: {}", e))
}
