//! Command handlers wiring dialogs to the tree and the store.

use std::sync::Arc;

use tracing::{debug, info};

use arcpanel_core::error::AppError;
use arcpanel_core::result::AppResult;
use arcpanel_core::types::ArchiveId;
use arcpanel_entity::{Archive, FileAsset};
use arcpanel_store::ArchiveStore;

use crate::command::PanelCommand;
use crate::host::HostSurface;
use crate::model::ArchiveTree;
use crate::node::TreeNode;

/// Executes panel commands against the tree, the store, and the host.
///
/// Handlers are thin: dialogs come from the host, data from the store,
/// and every mutation goes through the tree. A dismissed dialog ends the
/// handler as a quiet no-op.
#[derive(Debug)]
pub struct ArchiveActions {
    /// The tree all mutations go through.
    tree: Arc<ArchiveTree>,
    /// Lookup source for command parameters.
    store: Arc<dyn ArchiveStore>,
    /// Dialogs and document handling.
    host: Arc<dyn HostSurface>,
}

impl ArchiveActions {
    /// Create the command handler set.
    pub fn new(
        tree: Arc<ArchiveTree>,
        store: Arc<dyn ArchiveStore>,
        host: Arc<dyn HostSurface>,
    ) -> Self {
        Self { tree, store, host }
    }

    /// Run one panel command to completion.
    pub async fn dispatch(&self, command: PanelCommand) -> AppResult<()> {
        debug!(command = command.name(), "Dispatching panel command");
        match command {
            PanelCommand::Filter => self.open_filter().await,
            PanelCommand::ResetFilter => self.reset_filter().await,
            PanelCommand::LoadNextPage { page } => self.tree.next_page(page).await,
            PanelCommand::Delete { archive } => {
                let archive = self.require_archive(archive).await?;
                self.delete_archive(&archive).await
            }
            PanelCommand::DownloadFile { archive, file } => {
                let archive = self.require_archive(archive).await?;
                let file = archive.find_file(file).ok_or_else(|| {
                    AppError::not_found(format!(
                        "Archive {} has no file {file}",
                        archive.title
                    ))
                })?;
                self.download_file(file).await
            }
            PanelCommand::DownloadMostRecent { archive } => {
                let archive = self.require_archive(archive).await?;
                self.download_most_recent(&archive).await
            }
        }
    }

    /// Open the filter form and apply a submitted filter.
    pub async fn open_filter(&self) -> AppResult<()> {
        match self.host.filter_form().await? {
            Some(filter) => self.tree.update_filter(filter).await,
            None => {
                debug!("Filter form dismissed");
                Ok(())
            }
        }
    }

    /// Clear the active filter.
    pub async fn reset_filter(&self) -> AppResult<()> {
        self.tree.reset_filter().await
    }

    /// Confirm and delete an archive from the view.
    ///
    /// Anything but an explicit "Yes" leaves the tree untouched.
    pub async fn delete_archive(&self, archive: &Archive) -> AppResult<()> {
        let message = format!("Do you really want to delete archive {}?", archive.title);
        let choice = self.host.choose(&message, &["Yes", "No"]).await?;
        if choice.as_deref() == Some("Yes") {
            self.tree.delete(archive.id).await?;
        } else {
            debug!(archive = %archive.id, "Delete aborted");
        }
        Ok(())
    }

    /// Download one file: pick a location, write the content, open it.
    ///
    /// Each step short-circuits when the user dismisses the dialog.
    pub async fn download_file(&self, file: &FileAsset) -> AppResult<()> {
        let Some(path) = self.host.save_dialog("Save file to ...", &file.name).await? else {
            debug!(file = %file.id, "Save dialog dismissed");
            return Ok(());
        };
        self.host
            .write_document(&path, file.content.as_bytes())
            .await?;
        self.host.open_document(&path).await?;
        info!(file = %file.id, path = %path.display(), "Downloaded file");
        Ok(())
    }

    /// Download the most recently added file of an archive.
    ///
    /// An archive without downloadable content, or with an empty file
    /// list, is a quiet no-op.
    pub async fn download_most_recent(&self, archive: &Archive) -> AppResult<()> {
        match archive.most_recent_file() {
            Some(file) => self.download_file(file).await,
            None => {
                debug!(archive = %archive.id, "No file to download");
                Ok(())
            }
        }
    }

    /// Delete by node, for hosts that hand over the selected row.
    pub async fn delete_node(&self, node: &TreeNode) -> AppResult<()> {
        match node {
            TreeNode::Archive(archive) => self.delete_archive(archive).await,
            other => Err(AppError::unsupported_node(format!(
                "Cannot delete a {} node",
                other.kind()
            ))),
        }
    }

    /// Download by node, for hosts that hand over the selected row.
    ///
    /// A file row downloads that file; an archive row downloads its most
    /// recent file.
    pub async fn download_node(&self, node: &TreeNode) -> AppResult<()> {
        match node {
            TreeNode::File(file) => self.download_file(file).await,
            TreeNode::Archive(archive) => self.download_most_recent(archive).await,
            other => Err(AppError::unsupported_node(format!(
                "Cannot download a {} node",
                other.kind()
            ))),
        }
    }

    async fn require_archive(&self, id: ArchiveId) -> AppResult<Archive> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Archive {id} not found")))
    }
}
