//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use arcpanel_core::config::AppConfig;
use arcpanel_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration files
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    profile: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
        }
        ConfigCommand::Validate => {
            // Loading already succeeded or the CLI would have exited, so
            // validation reduces to showing what came out of the merge.
            output::print_success(&format!("Configuration profile '{profile}' is valid"));
            output::print_kv("Seed", &config.data.seed.to_string());
            output::print_kv("Sample count", &config.data.sample_count.to_string());
            output::print_kv("Page size", &config.data.page_size.to_string());
            output::print_kv(
                "Max files per archive",
                &config.data.max_files_per_archive.to_string(),
            );
            output::print_kv(
                "Logging",
                &format!("{} ({})", config.logging.level, config.logging.format),
            );
        }
    }
    Ok(())
}
