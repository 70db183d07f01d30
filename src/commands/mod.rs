//! CLI command definitions and dispatch.

pub mod browse;
pub mod config;
pub mod delete;
pub mod download;
pub mod list;
pub mod show;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use arcpanel_core::config::AppConfig;
use arcpanel_core::error::AppError;
use arcpanel_store::MemoryArchiveStore;

use crate::output::OutputFormat;

/// ArcPanel — archive browser panel over an in-memory sample catalog
#[derive(Debug, Parser)]
#[command(name = "arcpanel", version, about, long_about = None)]
pub struct Cli {
    /// Configuration profile overlaid on config/default.toml
    #[arg(short, long, default_value = "local")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Override the configured sample dataset seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the archive tree interactively
    Browse,
    /// List one page of archives
    List(list::ListArgs),
    /// Show a single archive
    Show(show::ShowArgs),
    /// Download a file from an archive
    Download(download::DownloadArgs),
    /// Delete an archive from the view
    Delete(delete::DeleteArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, app_config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Browse => browse::execute(app_config).await,
            Commands::List(args) => list::execute(args, app_config, self.format).await,
            Commands::Show(args) => show::execute(args, app_config, self.format).await,
            Commands::Download(args) => download::execute(args, app_config).await,
            Commands::Delete(args) => delete::execute(args, app_config).await,
            Commands::Config(args) => {
                config::execute(args, &self.config, app_config, self.format).await
            }
        }
    }
}

/// Helper: build the seeded in-memory store.
pub fn build_store(config: &AppConfig) -> Arc<MemoryArchiveStore> {
    Arc::new(MemoryArchiveStore::with_samples(&config.data))
}
