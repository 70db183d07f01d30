//! Archive deletion CLI command.

use clap::Args;
use dialoguer::Confirm;

use arcpanel_core::config::AppConfig;
use arcpanel_core::error::AppError;
use arcpanel_core::types::ArchiveId;
use arcpanel_store::ArchiveStore;
use arcpanel_tree::{ArchiveTree, TreeEntry};

use crate::output;

/// Arguments for the delete command
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// The archive to delete
    pub id: ArchiveId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the delete command
pub async fn execute(args: &DeleteArgs, config: &AppConfig) -> Result<(), AppError> {
    let store = super::build_store(config);
    let archive = store
        .get(args.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Archive {} not found", args.id)))?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Do you really want to delete archive {}?",
                archive.title
            ))
            .default(false)
            .interact_opt()
            .unwrap_or(Some(false))
            .unwrap_or(false);
        if !confirmed {
            output::print_warning("Delete aborted");
            return Ok(());
        }
    }

    // Page through the view until the archive is materialized; a delete
    // only makes sense against what the tree actually shows.
    let tree = ArchiveTree::new(store, config.data.page_size);
    loop {
        let roots = tree.roots().await?;
        let in_view = roots
            .iter()
            .any(|entry| matches!(entry, TreeEntry::Archive(a) if a.id == args.id));
        if in_view {
            break;
        }
        match roots.last() {
            Some(TreeEntry::LoadMore { next_page }) => tree.next_page(*next_page).await?,
            _ => break,
        }
    }

    if tree.delete(args.id).await? {
        output::print_success(&format!("Archive '{}' removed from the view", archive.title));
    } else {
        // The default view keeps archives with downloadable files only.
        output::print_warning(&format!(
            "Archive '{}' is not part of the current view",
            archive.title
        ));
    }
    Ok(())
}
