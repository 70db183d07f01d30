//! The dialog and document surface the panel delegates to its host.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use arcpanel_core::result::AppResult;
use arcpanel_core::types::ArchiveFilter;

/// Dialogs and document handling supplied by the hosting environment.
///
/// Every dialog method distinguishes dismissal from failure: a dismissed
/// dialog is `Ok(None)`, which callers treat as "do nothing". Errors are
/// reserved for the host genuinely failing, such as a write to a
/// read-only location.
#[async_trait]
pub trait HostSurface: Send + Sync + std::fmt::Debug {
    /// Show the filter form. `None` when closed without submitting.
    async fn filter_form(&self) -> AppResult<Option<ArchiveFilter>>;

    /// Ask the user where to save a download. `None` when dismissed.
    async fn save_dialog(
        &self,
        title: &str,
        suggested_name: &str,
    ) -> AppResult<Option<PathBuf>>;

    /// Write downloaded content to the chosen location.
    async fn write_document(&self, path: &Path, content: &[u8]) -> AppResult<()>;

    /// Open a just-written document for viewing.
    async fn open_document(&self, path: &Path) -> AppResult<()>;

    /// Put a message with a set of choices to the user.
    ///
    /// `None` when the prompt is dismissed or when no choices were
    /// offered at all.
    async fn choose(&self, message: &str, choices: &[&str]) -> AppResult<Option<String>>;
}
