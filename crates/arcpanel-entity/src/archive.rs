//! Archive entity model.

use arcpanel_core::types::{ArchiveFilter, ArchiveId, FileId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::file::FileAsset;

/// A top-level record in the sample dataset.
///
/// `files` distinguishes "has downloadable content" from "how many files":
/// `None` means the archive was created without downloadable content,
/// `Some(vec![])` means it has downloadable content but the list happens to
/// be empty. The distinction drives icons and filter behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Archive {
    /// Unique archive identifier.
    pub id: ArchiveId,
    /// Monotonically increasing creation counter; the tree sort key.
    pub internal_id: u64,
    /// Display title shown in the tree.
    pub title: String,
    /// Secondary descriptive text.
    pub description: String,
    /// When the archive was last updated.
    pub last_updated: DateTime<Utc>,
    /// Downloadable files, present iff the archive has downloadable content.
    pub files: Option<Vec<FileAsset>>,
}

impl Archive {
    /// Whether the archive carries downloadable content.
    pub fn has_downloadable_content(&self) -> bool {
        self.files.is_some()
    }

    /// Number of files the archive owns.
    pub fn file_count(&self) -> usize {
        self.files.as_ref().map(Vec::len).unwrap_or(0)
    }

    /// Evaluate the filter predicate against this archive.
    ///
    /// With a search term in effect the title or description must contain
    /// it (case-sensitive), further restricted to archives with files when
    /// the filter says so. Without a term only archives with downloadable
    /// content match, regardless of the `has_files` flag.
    pub fn matches(&self, filter: &ArchiveFilter) -> bool {
        match filter.effective_term() {
            Some(term) => {
                let text_match = self.title.contains(term) || self.description.contains(term);
                if filter.has_files {
                    text_match && self.has_downloadable_content()
                } else {
                    text_match
                }
            }
            None => self.has_downloadable_content(),
        }
    }

    /// The most recently added file, if any.
    pub fn most_recent_file(&self) -> Option<&FileAsset> {
        self.files.as_ref().and_then(|files| files.last())
    }

    /// Look up an owned file by its identifier.
    pub fn find_file(&self, file_id: FileId) -> Option<&FileAsset> {
        self.files
            .as_ref()
            .and_then(|files| files.iter().find(|file| file.id == file_id))
    }
}
