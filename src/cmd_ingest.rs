//! `ingest` subcommand: load a categorized QA dataset.
//!
//! The dataset file maps category names to record lists:
//!
//! ```json
//! {
//!   "emi": [
//!     {"user": "Karthik", "question": "...", "answer": "...", "metadata": {...}}
//!   ]
//! }
//! ```
//!
//! Every record goes into the keyword store; its question is embedded and
//! upserted into the vector index with the full record echoed as metadata.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use loanassist_config::Config;
use loanassist_protocols::{
    KeywordStore, Metadata, QaRecord, VectorIndex, VectorRecord,
};

use crate::setup;

#[derive(Debug, Deserialize)]
struct DatasetEntry {
    user: String,
    question: String,
    answer: String,
    #[serde(default)]
    metadata: Metadata,
}

pub(crate) async fn run(config: &Config, file: &Path) -> Result<()> {
    let collaborators = setup::build(config).await?;

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read dataset {}", file.display()))?;
    let dataset: BTreeMap<String, Vec<DatasetEntry>> =
        serde_json::from_str(&content).context("invalid dataset format")?;

    let mut vectors = Vec::new();
    for (category, entries) in &dataset {
        for entry in entries {
            let record = QaRecord::new(
                category.clone(),
                entry.user.clone(),
                entry.question.clone(),
                entry.answer.clone(),
            )
            .with_metadata(entry.metadata.clone());

            collaborators.store.insert(&record).await?;

            let embedding = collaborators.embedder.embed(&record.question).await?;
            vectors.push(VectorRecord {
                id: record.id.clone(),
                values: embedding.vector,
                metadata: record.index_metadata(),
            });
        }
        info!(category = %category, count = entries.len(), "ingested category");
    }

    let total = vectors.len();
    collaborators.index.upsert(vectors).await?;
    info!(
        count = total,
        index = %collaborators.index.name(),
        "uploaded vectors"
    );

    println!(
        "Ingested {} records across {} categories",
        total,
        dataset.len()
    );
    Ok(())
}
