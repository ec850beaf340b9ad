//! loanassist - hybrid retrieval for natural-language loan questions.
//!
//! Main entry point for the loanassist CLI and server.

use std::path::Path;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{error, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use loanassist_config::{Config, ConfigLoader, ConfigValidator};

mod cli;
mod cmd_chat;
mod cmd_index;
mod cmd_ingest;
mod cmd_serve;
mod cmd_store;
mod setup;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    let log_dir = match &command {
        Commands::Serve { .. } => config.server.log_dir.clone(),
        _ => None,
    };
    init_tracing(log_dir.as_deref())?;

    check_config(&config)?;

    match command {
        Commands::Serve { host, port } => cmd_serve::run(&config, host, port).await,
        Commands::Chat { user } => cmd_chat::run(&config, user).await,
        Commands::Ingest { file } => cmd_ingest::run(&config, &file).await,
        Commands::Index { action } => cmd_index::run(&config, action).await,
        Commands::Store { action } => cmd_store::run(&config, action).await,
    }
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Ok(ConfigLoader::load(path)?)
    } else {
        // Run on defaults; the validator will flag anything unusable.
        Ok(Config::default())
    }
}

fn check_config(config: &Config) -> Result<()> {
    let result = ConfigValidator::validate(config)?;

    for warning in &result.warnings {
        warn!("config: {}: {}", warning.path, warning.message);
    }
    if !result.is_valid() {
        for err in &result.errors {
            error!("config: {}: {}", err.path, err.message);
        }
        bail!("invalid configuration ({} errors)", result.errors.len());
    }
    Ok(())
}

fn init_tracing(log_dir: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // File layer only in server mode, daily rotation.
    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("loanassist")
                .filename_suffix("log")
                .max_log_files(30)
                .build(dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Keep the guard alive for the program duration.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .init();

    Ok(())
}
