//! CLI definitions for loanassist.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// loanassist CLI.
#[derive(Parser)]
#[command(name = "loanassist")]
#[command(about = "Hybrid keyword + semantic retrieval for loan questions")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the HTTP front door in foreground (default)
    Serve {
        /// Server host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Interactive question prompt
    Chat {
        /// Only answer from this user's records
        #[arg(long)]
        user: Option<String>,
    },

    /// Load a categorized QA dataset into the store and the index
    Ingest {
        /// Path to the dataset JSON file
        file: PathBuf,
    },

    /// Vector index provisioning
    Index {
        #[command(subcommand)]
        action: IndexAction,
    },

    /// Keyword store inspection
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum IndexAction {
    /// Create the configured index if it does not exist
    Create,

    /// Print index statistics and flag dimension mismatches
    Check,

    /// Delete and re-create the configured index
    Recreate,
}

#[derive(Subcommand)]
pub(crate) enum StoreAction {
    /// Dump the stored records
    Check,
}
