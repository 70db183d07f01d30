//! End-to-end panel flows: commands dispatched through dialogs down to
//! tree mutations and document writes.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use arcpanel_core::error::ErrorKind;
use arcpanel_core::result::AppResult;
use arcpanel_core::types::{ArchiveFilter, ArchiveId};
use arcpanel_entity::{Archive, FileAsset};
use arcpanel_store::MemoryArchiveStore;
use arcpanel_tree::{
    ArchiveActions, ArchiveTree, ChangeListener, HostSurface, PanelCommand, TreeEntry,
};

/// Host double driven by preloaded dialog responses. Records every
/// surface interaction so tests can assert on the side effects.
#[derive(Debug, Default)]
struct ScriptedHost {
    /// What the filter form returns; `None` means dismissed.
    filter_response: Mutex<Option<ArchiveFilter>>,
    /// What the save dialog returns; `None` means dismissed.
    save_response: Mutex<Option<PathBuf>>,
    /// What the choice prompt returns; `None` means dismissed.
    choice_response: Mutex<Option<String>>,
    /// Suggested names passed to the save dialog.
    save_dialogs: Mutex<Vec<String>>,
    /// Messages shown by the choice prompt.
    prompts: Mutex<Vec<String>>,
    /// Paths written, with their content.
    written: Mutex<Vec<(PathBuf, Vec<u8>)>>,
    /// Paths opened for viewing.
    opened: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl HostSurface for ScriptedHost {
    async fn filter_form(&self) -> AppResult<Option<ArchiveFilter>> {
        Ok(self.filter_response.lock().unwrap().clone())
    }

    async fn save_dialog(&self, _title: &str, suggested_name: &str) -> AppResult<Option<PathBuf>> {
        self.save_dialogs
            .lock()
            .unwrap()
            .push(suggested_name.to_string());
        Ok(self.save_response.lock().unwrap().clone())
    }

    async fn write_document(&self, path: &Path, content: &[u8]) -> AppResult<()> {
        std::fs::write(path, content)?;
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_vec()));
        Ok(())
    }

    async fn open_document(&self, path: &Path) -> AppResult<()> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    async fn choose(&self, message: &str, choices: &[&str]) -> AppResult<Option<String>> {
        self.prompts.lock().unwrap().push(message.to_string());
        if choices.is_empty() {
            return Ok(None);
        }
        Ok(self.choice_response.lock().unwrap().clone())
    }
}

struct Panel {
    tree: Arc<ArchiveTree>,
    actions: ArchiveActions,
    host: Arc<ScriptedHost>,
    listener: ChangeListener,
}

fn panel_over(archives: Vec<Archive>) -> Panel {
    let store = Arc::new(MemoryArchiveStore::from_archives(archives));
    let tree = Arc::new(ArchiveTree::new(store.clone(), 10));
    let host = Arc::new(ScriptedHost::default());
    let listener = tree.subscribe();
    let actions = ArchiveActions::new(tree.clone(), store, host.clone());
    Panel {
        tree,
        actions,
        host,
        listener,
    }
}

fn archive(internal_id: u64, files: Option<Vec<FileAsset>>) -> Archive {
    Archive {
        id: ArchiveId::new(),
        internal_id,
        title: format!("Archive {internal_id}"),
        description: "Lorem Ipsum".to_string(),
        last_updated: Utc::now(),
        files,
    }
}

/// Thirty archives, each with two files.
fn thirty_with_files() -> Vec<Archive> {
    (1..=30)
        .map(|internal_id| {
            archive(
                internal_id,
                Some(vec![
                    FileAsset::new("File 1", "aaaaa"),
                    FileAsset::new("File 2", "zz9k3"),
                ]),
            )
        })
        .collect()
}

/// Thirty archives where only every third one has files.
fn thirty_mixed() -> Vec<Archive> {
    (1..=30)
        .map(|internal_id| {
            archive(
                internal_id,
                (internal_id % 3 == 0).then(|| vec![FileAsset::new("File 1", "aaaaa")]),
            )
        })
        .collect()
}

fn internal_ids(entries: &[TreeEntry]) -> Vec<u64> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            TreeEntry::Archive(archive) => Some(archive.internal_id),
            TreeEntry::LoadMore { .. } => None,
        })
        .collect()
}

fn first_archive(entries: &[TreeEntry]) -> Archive {
    entries
        .iter()
        .find_map(|entry| match entry {
            TreeEntry::Archive(archive) => Some(archive.clone()),
            TreeEntry::LoadMore { .. } => None,
        })
        .expect("fixture should contain at least one archive")
}

#[tokio::test]
async fn test_paging_to_exhaustion_via_commands() {
    let panel = panel_over(thirty_with_files());

    let mut roots = panel.tree.roots().await.unwrap();
    let mut pages_loaded = 0;
    while let Some(TreeEntry::LoadMore { next_page }) = roots.last().cloned() {
        panel
            .actions
            .dispatch(PanelCommand::LoadNextPage { page: next_page })
            .await
            .unwrap();
        pages_loaded += 1;
        roots = panel.tree.roots().await.unwrap();
    }

    assert_eq!(pages_loaded, 2);
    assert_eq!(internal_ids(&roots), (1..=30).collect::<Vec<_>>());
    // One signal per load, none for the initial materialization.
    assert_eq!(panel.listener.generation(), 2);
}

#[tokio::test]
async fn test_filter_flow_through_form() {
    let panel = panel_over(thirty_with_files());
    *panel.host.filter_response.lock().unwrap() =
        Some(ArchiveFilter::new(Some("Archive 2".to_string()), false));

    panel.actions.dispatch(PanelCommand::Filter).await.unwrap();
    assert!(panel.tree.has_filter().await);
    assert_eq!(panel.listener.generation(), 1);

    // "Archive 2" plus "Archive 20" through "Archive 29".
    let roots = panel.tree.roots().await.unwrap();
    assert_eq!(
        internal_ids(&roots),
        vec![2, 20, 21, 22, 23, 24, 25, 26, 27, 28]
    );

    panel
        .actions
        .dispatch(PanelCommand::ResetFilter)
        .await
        .unwrap();
    assert!(!panel.tree.has_filter().await);
    assert_eq!(panel.listener.generation(), 2);
    assert_eq!(
        internal_ids(&panel.tree.roots().await.unwrap()),
        (1..=10).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_dismissed_filter_form_changes_nothing() {
    let panel = panel_over(thirty_with_files());
    panel.tree.roots().await.unwrap();

    panel.actions.dispatch(PanelCommand::Filter).await.unwrap();

    assert!(!panel.tree.has_filter().await);
    assert_eq!(panel.listener.generation(), 0);
}

#[tokio::test]
async fn test_default_view_shows_only_archives_with_files() {
    let panel = panel_over(thirty_mixed());
    let roots = panel.tree.roots().await.unwrap();

    // Ten of thirty archives have files; they fit one page exactly, so
    // no load-more row appears.
    assert_eq!(roots.len(), 10);
    assert_eq!(
        internal_ids(&roots),
        vec![3, 6, 9, 12, 15, 18, 21, 24, 27, 30]
    );
}

#[tokio::test]
async fn test_delete_confirmed_removes_archive() {
    let panel = panel_over(thirty_with_files());
    let target = first_archive(&panel.tree.roots().await.unwrap());
    *panel.host.choice_response.lock().unwrap() = Some("Yes".to_string());

    panel
        .actions
        .dispatch(PanelCommand::Delete { archive: target.id })
        .await
        .unwrap();

    assert_eq!(
        panel.host.prompts.lock().unwrap().as_slice(),
        ["Do you really want to delete archive Archive 1?"]
    );
    assert_eq!(panel.listener.generation(), 1);
    assert!(!internal_ids(&panel.tree.roots().await.unwrap()).contains(&1));
}

#[tokio::test]
async fn test_delete_declined_keeps_archive() {
    let panel = panel_over(thirty_with_files());
    let target = first_archive(&panel.tree.roots().await.unwrap());
    *panel.host.choice_response.lock().unwrap() = Some("No".to_string());

    panel
        .actions
        .dispatch(PanelCommand::Delete { archive: target.id })
        .await
        .unwrap();

    assert_eq!(panel.listener.generation(), 0);
    assert!(internal_ids(&panel.tree.roots().await.unwrap()).contains(&1));
}

#[tokio::test]
async fn test_delete_dismissed_keeps_archive() {
    let panel = panel_over(thirty_with_files());
    let target = first_archive(&panel.tree.roots().await.unwrap());

    panel
        .actions
        .dispatch(PanelCommand::Delete { archive: target.id })
        .await
        .unwrap();

    assert_eq!(panel.listener.generation(), 0);
    assert_eq!(panel.tree.roots().await.unwrap().len(), 11);
}

#[tokio::test]
async fn test_delete_unknown_archive_is_not_found() {
    let panel = panel_over(thirty_with_files());

    let error = panel
        .actions
        .dispatch(PanelCommand::Delete {
            archive: ArchiveId::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(error.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_download_writes_and_opens_document() {
    let panel = panel_over(thirty_with_files());
    let target = first_archive(&panel.tree.roots().await.unwrap());
    let file = target.files.as_ref().unwrap()[0].clone();

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("File 1.txt");
    *panel.host.save_response.lock().unwrap() = Some(destination.clone());

    panel
        .actions
        .dispatch(PanelCommand::DownloadFile {
            archive: target.id,
            file: file.id,
        })
        .await
        .unwrap();

    assert_eq!(
        panel.host.save_dialogs.lock().unwrap().as_slice(),
        ["File 1"]
    );
    assert_eq!(std::fs::read_to_string(&destination).unwrap(), "aaaaa");
    assert_eq!(
        panel.host.opened.lock().unwrap().as_slice(),
        [destination]
    );
    // Downloads never touch the tree.
    assert_eq!(panel.listener.generation(), 0);
}

#[tokio::test]
async fn test_download_cancelled_writes_nothing() {
    let panel = panel_over(thirty_with_files());
    let target = first_archive(&panel.tree.roots().await.unwrap());
    let file = target.files.as_ref().unwrap()[0].clone();

    panel
        .actions
        .dispatch(PanelCommand::DownloadFile {
            archive: target.id,
            file: file.id,
        })
        .await
        .unwrap();

    assert!(panel.host.written.lock().unwrap().is_empty());
    assert!(panel.host.opened.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_download_most_recent_picks_last_file() {
    let panel = panel_over(thirty_with_files());
    let target = first_archive(&panel.tree.roots().await.unwrap());

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("download");
    *panel.host.save_response.lock().unwrap() = Some(destination.clone());

    panel
        .actions
        .dispatch(PanelCommand::DownloadMostRecent { archive: target.id })
        .await
        .unwrap();

    assert_eq!(
        panel.host.save_dialogs.lock().unwrap().as_slice(),
        ["File 2"]
    );
    assert_eq!(std::fs::read_to_string(&destination).unwrap(), "zz9k3");
}

#[tokio::test]
async fn test_download_most_recent_with_no_files_is_noop() {
    let panel = panel_over(vec![archive(1, Some(vec![])), archive(2, Some(vec![]))]);
    let target = first_archive(&panel.tree.roots().await.unwrap());

    panel
        .actions
        .dispatch(PanelCommand::DownloadMostRecent { archive: target.id })
        .await
        .unwrap();

    // The save dialog never opens for an empty file list.
    assert!(panel.host.save_dialogs.lock().unwrap().is_empty());
    assert!(panel.host.written.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_file_is_not_found() {
    let panel = panel_over(thirty_with_files());
    let target = first_archive(&panel.tree.roots().await.unwrap());
    let other = first_archive(&panel.tree.roots().await.unwrap()[1..].to_vec());
    let foreign_file = other.files.as_ref().unwrap()[0].clone();

    let error = panel
        .actions
        .dispatch(PanelCommand::DownloadFile {
            archive: target.id,
            file: foreign_file.id,
        })
        .await
        .unwrap_err();
    assert_eq!(error.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_node_dispatch_rejects_foreign_kinds() {
    use arcpanel_tree::TreeNode;

    let panel = panel_over(thirty_with_files());

    let error = panel
        .actions
        .download_node(&TreeNode::Description("Lorem Ipsum".to_string()))
        .await
        .unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnsupportedNode);

    let file = FileAsset::new("File 1", "aaaaa");
    let error = panel
        .actions
        .delete_node(&TreeNode::File(file))
        .await
        .unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnsupportedNode);
}

#[tokio::test]
async fn test_deleted_archive_stays_gone_while_paging() {
    let panel = panel_over(thirty_with_files());
    let target = first_archive(&panel.tree.roots().await.unwrap());
    *panel.host.choice_response.lock().unwrap() = Some("Yes".to_string());

    panel
        .actions
        .dispatch(PanelCommand::Delete { archive: target.id })
        .await
        .unwrap();
    panel
        .actions
        .dispatch(PanelCommand::LoadNextPage { page: 1 })
        .await
        .unwrap();
    panel
        .actions
        .dispatch(PanelCommand::LoadNextPage { page: 2 })
        .await
        .unwrap();

    let ids = internal_ids(&panel.tree.roots().await.unwrap());
    assert_eq!(ids, (2..=30).collect::<Vec<_>>());
    assert_eq!(panel.listener.generation(), 3);
}
