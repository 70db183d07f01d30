//! The interactive archive panel.
//!
//! Renders the materialized tree, offers a palette of panel commands,
//! and re-reads everything from the root after each action, which is the
//! panel's consistency model: the change signal carries no payload, so a
//! consumer's only move is a full re-read.

use std::sync::Arc;

use dialoguer::Select;
use tracing::debug;

use arcpanel_core::config::AppConfig;
use arcpanel_core::error::AppError;
use arcpanel_core::result::AppResult;
use arcpanel_entity::Archive;
use arcpanel_tree::{
    ArchiveActions, ArchiveTree, PanelCommand, TreeDataProvider, TreeEntry, TreeItem,
};

use crate::host::TerminalHost;
use crate::output;

/// One palette entry the user can pick.
#[derive(Debug, Clone, Copy)]
enum PaletteAction {
    Filter,
    ResetFilter,
    LoadMore(u64),
    Download,
    Delete,
    Quit,
}

/// Execute the browse command
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let store = super::build_store(config);
    let tree = Arc::new(ArchiveTree::new(store.clone(), config.data.page_size));
    let actions = ArchiveActions::new(tree.clone(), store, Arc::new(TerminalHost));

    loop {
        render(tree.as_ref()).await?;

        let Some(action) = palette(tree.as_ref()).await? else {
            break;
        };
        debug!(action = ?action, "Palette action");

        match action {
            PaletteAction::Filter => actions.dispatch(PanelCommand::Filter).await?,
            PaletteAction::ResetFilter => actions.dispatch(PanelCommand::ResetFilter).await?,
            PaletteAction::LoadMore(page) => {
                actions.dispatch(PanelCommand::LoadNextPage { page }).await?
            }
            PaletteAction::Download => download(&tree, &actions).await?,
            PaletteAction::Delete => delete(&tree, &actions).await?,
            PaletteAction::Quit => break,
        }
    }
    Ok(())
}

/// Print the whole tree: roots, their synthesized children, and the files
/// below the grouping rows.
async fn render(tree: &ArchiveTree) -> AppResult<()> {
    println!();
    if let Some(filter) = tree.current_filter().await {
        println!(
            "Filter: term={} files-only={}",
            filter.effective_term().unwrap_or("(none)"),
            filter.has_files
        );
    }

    let roots = tree.children(None).await?.unwrap_or_default();
    if roots.is_empty() {
        println!("  (no archives match)");
        return Ok(());
    }
    for node in &roots {
        print_row(&tree.tree_item(node)?, 0);
        let Some(children) = tree.children(Some(node)).await? else {
            continue;
        };
        for child in &children {
            print_row(&tree.tree_item(child)?, 1);
            let Some(grandchildren) = tree.children(Some(child)).await? else {
                continue;
            };
            for grandchild in &grandchildren {
                print_row(&tree.tree_item(grandchild)?, 2);
            }
        }
    }
    Ok(())
}

fn print_row(item: &TreeItem, depth: usize) {
    let indent = "  ".repeat(depth + 1);
    match item.icon {
        Some(icon) => println!("{indent}[{}] {}", icon.as_str(), item.label),
        None => println!("{indent}{}", item.label),
    }
}

/// Offer the palette and return the chosen action; `None` means quit.
async fn palette(tree: &ArchiveTree) -> AppResult<Option<PaletteAction>> {
    let mut labels: Vec<&str> = vec!["Filter archives"];
    let mut choices: Vec<PaletteAction> = vec![PaletteAction::Filter];

    if tree.has_filter().await {
        labels.push("Reset filter");
        choices.push(PaletteAction::ResetFilter);
    }
    if let Some(TreeEntry::LoadMore { next_page }) = tree.roots().await?.last() {
        labels.push("Load more");
        choices.push(PaletteAction::LoadMore(*next_page));
    }
    labels.push("Download a file");
    choices.push(PaletteAction::Download);
    labels.push("Delete an archive");
    choices.push(PaletteAction::Delete);
    labels.push("Quit");
    choices.push(PaletteAction::Quit);

    Ok(select("Action", &labels)?.map(|index| choices[index]))
}

/// Pick an archive with files, pick one of its files, and dispatch the
/// download command for it.
async fn download(tree: &ArchiveTree, actions: &ArchiveActions) -> AppResult<()> {
    let archives: Vec<Archive> = live_archives(tree)
        .await?
        .into_iter()
        .filter(Archive::has_downloadable_content)
        .collect();
    if archives.is_empty() {
        output::print_warning("No archive in the view has downloadable files");
        return Ok(());
    }

    let titles: Vec<&str> = archives.iter().map(|a| a.title.as_str()).collect();
    let Some(index) = select("Download from which archive?", &titles)? else {
        return Ok(());
    };
    let archive = &archives[index];

    let files = archive.files.as_deref().unwrap_or_default();
    if files.is_empty() {
        output::print_warning(&format!("Archive {} has no files", archive.title));
        return Ok(());
    }
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    let Some(file_index) = select("Which file?", &names)? else {
        return Ok(());
    };

    actions
        .dispatch(PanelCommand::DownloadFile {
            archive: archive.id,
            file: files[file_index].id,
        })
        .await
}

/// Pick an archive and dispatch the delete command, which confirms
/// through the host before touching the tree.
async fn delete(tree: &ArchiveTree, actions: &ArchiveActions) -> AppResult<()> {
    let archives = live_archives(tree).await?;
    if archives.is_empty() {
        output::print_warning("Nothing to delete");
        return Ok(());
    }
    let titles: Vec<&str> = archives.iter().map(|a| a.title.as_str()).collect();
    let Some(index) = select("Delete which archive?", &titles)? else {
        return Ok(());
    };

    actions
        .dispatch(PanelCommand::Delete {
            archive: archives[index].id,
        })
        .await
}

/// The archives currently materialized in the view.
async fn live_archives(tree: &ArchiveTree) -> AppResult<Vec<Archive>> {
    Ok(tree
        .roots()
        .await?
        .into_iter()
        .filter_map(|entry| match entry {
            TreeEntry::Archive(archive) => Some(archive),
            TreeEntry::LoadMore { .. } => None,
        })
        .collect())
}

/// A select prompt; dismissal maps to `None`.
fn select(prompt: &str, items: &[&str]) -> AppResult<Option<usize>> {
    match Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
    {
        Ok(choice) => Ok(choice),
        Err(_) => Ok(None),
    }
}
