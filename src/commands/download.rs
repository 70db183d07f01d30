//! File download CLI command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use arcpanel_core::config::AppConfig;
use arcpanel_core::error::AppError;
use arcpanel_core::types::{ArchiveId, FileId};
use arcpanel_entity::FileAsset;
use arcpanel_store::ArchiveStore;
use arcpanel_tree::{ArchiveActions, ArchiveTree};

use crate::host::TerminalHost;
use crate::output;

/// Arguments for the download command
#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// The archive to download from
    pub id: ArchiveId,

    /// A specific file to download; defaults to the most recent one
    #[arg(long)]
    pub file: Option<FileId>,

    /// Write here instead of asking for a location
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the download command
pub async fn execute(args: &DownloadArgs, config: &AppConfig) -> Result<(), AppError> {
    let store = super::build_store(config);
    let archive = store
        .get(args.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Archive {} not found", args.id)))?;

    let file: &FileAsset = match args.file {
        Some(file_id) => archive.find_file(file_id).ok_or_else(|| {
            AppError::not_found(format!("Archive {} has no file {file_id}", archive.title))
        })?,
        None => match archive.most_recent_file() {
            Some(file) => file,
            None => {
                output::print_warning(&format!(
                    "Archive {} has no downloadable files",
                    archive.title
                ));
                return Ok(());
            }
        },
    };

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, file.content.as_bytes()).await?;
            output::print_success(&format!("Wrote {} to {}", file.name, path.display()));
        }
        None => {
            let tree = Arc::new(ArchiveTree::new(store.clone(), config.data.page_size));
            let actions = ArchiveActions::new(tree, store, Arc::new(TerminalHost));
            actions.download_file(file).await?;
        }
    }
    Ok(())
}
