//! File entity model.

use arcpanel_core::types::FileId;
use serde::{Deserialize, Serialize};

/// A downloadable file owned by an archive.
///
/// Files are immutable and exist only as children of their archive; they
/// are never shared between archives or mutated after generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAsset {
    /// Unique file identifier.
    pub id: FileId,
    /// Display name shown in the tree.
    pub name: String,
    /// Opaque payload written out on download.
    pub content: String,
}

impl FileAsset {
    /// Create a new file asset.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: FileId::new(),
            name: name.into(),
            content: content.into(),
        }
    }
}
