//! Tree node unions.

use arcpanel_entity::{Archive, FileAsset};

/// A value materialized as a root-level row.
#[derive(Debug, Clone)]
pub enum TreeEntry {
    /// An archive record loaded from the store.
    Archive(Archive),
    /// Sentinel meaning more data exists beyond the loaded pages.
    LoadMore {
        /// The page to fetch when the row is activated.
        next_page: u64,
    },
}

/// Any node the host can display.
///
/// Beyond the root-level entries this includes the children synthesized
/// under an archive on demand: its description row, the grouping row for
/// its files, and the file rows themselves. Synthesized nodes are never
/// stored in the tree.
#[derive(Debug, Clone)]
pub enum TreeNode {
    /// Root-level archive row.
    Archive(Archive),
    /// Description row under an archive.
    Description(String),
    /// Grouping row for an archive's files.
    FileGroup {
        /// The files shown under the group.
        files: Vec<FileAsset>,
    },
    /// A single downloadable file row.
    File(FileAsset),
    /// The "load more" row.
    LoadMore {
        /// The page to fetch when the row is activated.
        next_page: u64,
    },
}

impl TreeNode {
    /// Stable kind name, for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Archive(_) => "archive",
            Self::Description(_) => "description",
            Self::FileGroup { .. } => "files",
            Self::File(_) => "file",
            Self::LoadMore { .. } => "loadMore",
        }
    }
}

impl From<TreeEntry> for TreeNode {
    fn from(entry: TreeEntry) -> Self {
        match entry {
            TreeEntry::Archive(archive) => Self::Archive(archive),
            TreeEntry::LoadMore { next_page } => Self::LoadMore { next_page },
        }
    }
}
