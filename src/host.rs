//! Terminal implementation of the panel's host dialog surface.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dialoguer::{Confirm, Input, Select};

use arcpanel_core::result::AppResult;
use arcpanel_core::types::ArchiveFilter;
use arcpanel_tree::HostSurface;

/// Dialogs over stdin/stdout.
///
/// Backing out of a prompt resolves to `Ok(None)`, same as dismissing a
/// dialog in a graphical host. dialoguer reports an interrupted prompt as
/// an error; that is treated as a dismissal too, since neither is a
/// failure of the panel.
#[derive(Debug, Default)]
pub struct TerminalHost;

#[async_trait]
impl HostSurface for TerminalHost {
    async fn filter_form(&self) -> AppResult<Option<ArchiveFilter>> {
        let term: String = match Input::new()
            .with_prompt("Search term (leave empty for none)")
            .allow_empty(true)
            .interact_text()
        {
            Ok(term) => term,
            Err(_) => return Ok(None),
        };

        let has_files = match Confirm::new()
            .with_prompt("Only archives with downloadable files?")
            .default(true)
            .interact_opt()
        {
            Ok(Some(answer)) => answer,
            Ok(None) | Err(_) => return Ok(None),
        };

        let term = (!term.is_empty()).then_some(term);
        Ok(Some(ArchiveFilter::new(term, has_files)))
    }

    async fn save_dialog(&self, title: &str, suggested_name: &str) -> AppResult<Option<PathBuf>> {
        let path: String = match Input::new()
            .with_prompt(title)
            .with_initial_text(suggested_name)
            .allow_empty(true)
            .interact_text()
        {
            Ok(path) => path,
            Err(_) => return Ok(None),
        };
        Ok((!path.is_empty()).then(|| PathBuf::from(path)))
    }

    async fn write_document(&self, path: &Path, content: &[u8]) -> AppResult<()> {
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    /// "Opening" a document in a terminal host prints it.
    async fn open_document(&self, path: &Path) -> AppResult<()> {
        let content = tokio::fs::read_to_string(path).await?;
        println!("── {} ──", path.display());
        println!("{content}");
        Ok(())
    }

    async fn choose(&self, message: &str, choices: &[&str]) -> AppResult<Option<String>> {
        if choices.is_empty() {
            return Ok(None);
        }
        match Select::new()
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact_opt()
        {
            Ok(Some(index)) => Ok(Some(choices[index].to_string())),
            Ok(None) | Err(_) => Ok(None),
        }
    }
}
