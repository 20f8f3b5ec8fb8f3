//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod repository;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a single repository
    Create {
        /// Repository name
        name: String,

        /// Repository description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Create several repositories in one batch
    Batch {
        /// Repository names
        names: Vec<String>,

        /// JSON file holding an array of {"name", "description"} requests
        #[arg(short, long)]
        file: Option<String>,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Create { name, description } => {
            repository::create_repository(config, name, description).await
        }
        Commands::Batch { names, file } => {
            repository::create_repositories(config, names, file).await
        }
    }
}
