//! Named entry points exposed by the panel.

use serde::Serialize;

use arcpanel_core::types::{ArchiveId, FileId};

/// View identifier the panel registers under. Command identifiers and the
/// filter context key are derived from it.
pub const VIEW_ID: &str = "arcpanel.archiveTree";

/// A parameterized command a host affordance can invoke.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PanelCommand {
    /// Open the filter form and apply the submitted filter.
    Filter,
    /// Clear the active filter.
    ResetFilter,
    /// Load the given page and merge it into the tree.
    LoadNextPage {
        /// The page to load.
        page: u64,
    },
    /// Delete an archive after confirmation.
    Delete {
        /// The archive to delete.
        archive: ArchiveId,
    },
    /// Download a specific file of an archive.
    DownloadFile {
        /// The archive owning the file.
        archive: ArchiveId,
        /// The file to download.
        file: FileId,
    },
    /// Download the most recently added file of an archive.
    DownloadMostRecent {
        /// The archive to download from.
        archive: ArchiveId,
    },
}

impl PanelCommand {
    /// Bare command name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::ResetFilter => "resetFilter",
            Self::LoadNextPage { .. } => "loadNextPage",
            Self::Delete { .. } => "delete",
            Self::DownloadFile { .. } => "downloadFile",
            Self::DownloadMostRecent { .. } => "downloadMostRecent",
        }
    }

    /// Dotted command identifier under [`VIEW_ID`].
    pub fn id(&self) -> String {
        format!("{VIEW_ID}.{}", self.name())
    }

    /// Human-readable title for palettes and menus.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Filter => "Filter archives",
            Self::ResetFilter => "Reset filter",
            Self::LoadNextPage { .. } => "Next page",
            Self::Delete { .. } => "Delete archive",
            Self::DownloadFile { .. } => "Download file",
            Self::DownloadMostRecent { .. } => "Download most recent file",
        }
    }
}
