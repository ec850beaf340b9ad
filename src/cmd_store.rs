//! `store` subcommand: keyword store inspection.

use anyhow::Result;

use loanassist_config::Config;
use loanassist_protocols::KeywordStore;

use crate::cli::StoreAction;
use crate::setup;

const DUMP_LIMIT: usize = 100;

pub(crate) async fn run(config: &Config, action: StoreAction) -> Result<()> {
    let store = setup::store(config).await?;

    match action {
        StoreAction::Check => {
            let count = store.count().await?;
            println!("Keyword store: {} records", count);
            println!("{}", "=".repeat(50));

            for record in store.all(DUMP_LIMIT).await? {
                println!("\nCategory: {}", record.category);
                println!("User: {}", record.user);
                println!("Question: {}", record.question);
                println!("Answer: {}", record.answer);
                if !record.metadata.is_empty() {
                    println!("Metadata:");
                    for (key, value) in &record.metadata {
                        let display = value
                            .as_str()
                            .map(str::to_string)
                            .unwrap_or_else(|| value.to_string());
                        println!("  - {}: {}", key, display);
                    }
                }
                println!("{}", "-".repeat(50));
            }

            if count > DUMP_LIMIT {
                println!("(showing first {} of {} records)", DUMP_LIMIT, count);
            }
        }
    }

    Ok(())
}
