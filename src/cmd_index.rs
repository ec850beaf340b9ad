//! `index` subcommand: vector index provisioning.

use anyhow::Result;

use loanassist_config::Config;

use crate::cli::IndexAction;
use crate::setup;

pub(crate) async fn run(config: &Config, action: IndexAction) -> Result<()> {
    let index = setup::index_client(config);

    match action {
        IndexAction::Create => {
            if index.exists().await? {
                println!("Index '{}' already exists", index.name());
            } else {
                index.create().await?;
                println!(
                    "Index '{}' created (dimension {}, metric {})",
                    index.name(),
                    config.index.dimension,
                    config.index.metric
                );
            }
        }
        IndexAction::Check => {
            let stats = index.stats().await?;
            println!("Index '{}'", index.name());
            println!("  dimension: {}", stats.dimension);
            println!("  vectors:   {}", stats.total_vector_count);

            if stats.dimension != config.embedding.dimension {
                println!(
                    "  WARNING: index dimension {} does not match embedding dimension {}; \
                     every query will fail until one side is fixed",
                    stats.dimension, config.embedding.dimension
                );
            }
        }
        IndexAction::Recreate => {
            if index.exists().await? {
                index.delete().await?;
                println!("Deleted existing index '{}'", index.name());
            }
            index.create().await?;
            if index.exists().await? {
                println!(
                    "Index '{}' recreated with dimension {}",
                    index.name(),
                    config.index.dimension
                );
            } else {
                anyhow::bail!("index '{}' missing after recreate", index.name());
            }
        }
    }

    Ok(())
}
