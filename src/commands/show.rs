//! Single-archive display CLI command.

use clap::Args;

use arcpanel_core::config::AppConfig;
use arcpanel_core::error::AppError;
use arcpanel_core::types::ArchiveId;
use arcpanel_store::ArchiveStore;

use crate::output::{self, OutputFormat};

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// The archive to show
    pub id: ArchiveId,
}

/// Execute the show command
pub async fn execute(
    args: &ShowArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::build_store(config);
    let archive = store
        .get(args.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Archive {} not found", args.id)))?;

    match format {
        OutputFormat::Json => output::print_item(&archive, format),
        OutputFormat::Table => {
            output::print_kv("Id", &archive.id.to_string());
            output::print_kv("Seq", &archive.internal_id.to_string());
            output::print_kv("Title", &archive.title);
            output::print_kv("Description", &archive.description);
            output::print_kv("Last updated", &archive.last_updated.to_rfc3339());
            match &archive.files {
                None => output::print_kv("Files", "none (no downloadable content)"),
                Some(files) => {
                    output::print_kv("Files", &files.len().to_string());
                    for file in files {
                        println!("    {} ({})", file.name, file.id);
                    }
                }
            }
        }
    }
    Ok(())
}
