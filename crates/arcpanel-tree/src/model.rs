//! The materialized archive tree.
//!
//! [`ArchiveTree`] owns the ordered list of root slots the panel shows:
//! the archives loaded so far, tombstones of deleted archives, and at most
//! one trailing "load more" marker. All mutations funnel through it. Each
//! mutating operation takes the state lock for its full duration, releases
//! it, and only then fires the change signal exactly once, so a re-entrant
//! read triggered by the signal can never observe a half-merged list.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use arcpanel_core::result::AppResult;
use arcpanel_core::types::{ArchiveFilter, ArchiveId, PageRequest};
use arcpanel_store::ArchiveStore;

use crate::node::TreeEntry;
use crate::notify::{ChangeListener, ChangeNotifier};

/// One position in the materialized list.
///
/// Deletion replaces a slot instead of removing it: surviving entries keep
/// their positions, pagination progress still counts the slot, and a later
/// page merge recognizes the id and will not resurrect the archive.
#[derive(Debug, Clone)]
enum Slot {
    /// A visible entry.
    Live(TreeEntry),
    /// A deleted archive, remembered by id.
    Deleted(ArchiveId),
}

#[derive(Debug, Default)]
struct TreeState {
    /// Materialized slots in display order.
    slots: Vec<Slot>,
    /// The filter applied by the user, if any.
    filter: Option<ArchiveFilter>,
}

/// The tree model: materialized pages, the active filter, and the change
/// signal.
#[derive(Debug)]
pub struct ArchiveTree {
    /// Source of archive pages.
    store: Arc<dyn ArchiveStore>,
    /// Number of archives fetched per page.
    page_size: u64,
    /// Mutable view state.
    state: RwLock<TreeState>,
    /// Fired once per mutating operation.
    notifier: ChangeNotifier,
}

impl ArchiveTree {
    /// Create an empty tree over the given store.
    pub fn new(store: Arc<dyn ArchiveStore>, page_size: u64) -> Self {
        Self {
            store,
            page_size,
            state: RwLock::new(TreeState::default()),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Subscribe to the change signal.
    ///
    /// The signal carries no payload. On every notification consumers
    /// re-read the tree from the root; there are no diff semantics.
    pub fn subscribe(&self) -> ChangeListener {
        self.notifier.subscribe()
    }

    /// Whether a user-applied filter is active.
    pub async fn has_filter(&self) -> bool {
        self.state.read().await.filter.is_some()
    }

    /// The active filter, if any.
    pub async fn current_filter(&self) -> Option<ArchiveFilter> {
        self.state.read().await.filter.clone()
    }

    /// The root entries, materializing the first page on first access.
    ///
    /// Does not fire the change signal: the caller asked for the data and
    /// already holds the answer.
    pub async fn roots(&self) -> AppResult<Vec<TreeEntry>> {
        {
            let state = self.state.read().await;
            if !state.slots.is_empty() {
                return Ok(live_entries(&state.slots));
            }
        }

        let mut state = self.state.write().await;
        // Another task may have materialized while we waited for the lock.
        if state.slots.is_empty() {
            let batch = self
                .fetch_batch(state.filter.as_ref(), state.slots.len(), 0)
                .await?;
            state.slots.extend(batch.into_iter().map(Slot::Live));
        }
        Ok(live_entries(&state.slots))
    }

    /// Load `page` from the store and merge it into the tree.
    ///
    /// Requires the trailing marker to be present; without it there is
    /// nothing left to page through and the slots stay untouched. Fires
    /// the change signal exactly once either way.
    pub async fn next_page(&self, page: u64) -> AppResult<()> {
        {
            let mut state = self.state.write().await;
            if matches!(
                state.slots.last(),
                Some(Slot::Live(TreeEntry::LoadMore { .. }))
            ) {
                // The marker slot itself is not pagination progress.
                let materialized = state.slots.len() - 1;
                let batch = self
                    .fetch_batch(state.filter.as_ref(), materialized, page)
                    .await?;
                state.slots.pop();
                for entry in batch {
                    merge_insert(&mut state.slots, entry);
                }
                debug!(page, slots = state.slots.len(), "Merged archive page");
            }
        }
        self.notifier.notify();
        Ok(())
    }

    /// Apply a new filter, discarding everything materialized so far.
    pub async fn update_filter(&self, filter: ArchiveFilter) -> AppResult<()> {
        {
            let mut state = self.state.write().await;
            info!(
                term = ?filter.effective_term(),
                has_files = filter.has_files,
                "Applying archive filter"
            );
            state.filter = Some(filter);
            state.slots.clear();
        }
        self.notifier.notify();
        Ok(())
    }

    /// Drop the filter and discard everything materialized so far.
    pub async fn reset_filter(&self) -> AppResult<()> {
        {
            let mut state = self.state.write().await;
            info!("Resetting archive filter");
            state.filter = None;
            state.slots.clear();
        }
        self.notifier.notify();
        Ok(())
    }

    /// Delete an archive from the view, leaving a tombstone in its slot.
    ///
    /// Returns whether a live entry was found. The change signal fires
    /// either way, so the panel refreshes even for a stale request.
    pub async fn delete(&self, id: ArchiveId) -> AppResult<bool> {
        let found = {
            let mut state = self.state.write().await;
            let position = state.slots.iter().position(|slot| {
                matches!(slot, Slot::Live(TreeEntry::Archive(archive)) if archive.id == id)
            });
            if let Some(index) = position {
                state.slots[index] = Slot::Deleted(id);
            }
            position.is_some()
        };

        if found {
            info!(archive = %id, "Deleted archive from view");
        } else {
            debug!(archive = %id, "Delete requested for archive not in view");
        }
        self.notifier.notify();
        Ok(found)
    }

    /// Fetch one store page as a batch of entries, with a trailing marker
    /// appended when more matching records remain beyond what the tree
    /// has materialized.
    ///
    /// `materialized` counts tombstones too: the records they shadow are
    /// still in the store's pages, so progress must include them.
    async fn fetch_batch(
        &self,
        filter: Option<&ArchiveFilter>,
        materialized: usize,
        page: u64,
    ) -> AppResult<Vec<TreeEntry>> {
        let request = PageRequest::new(page, self.page_size);
        let response = self.store.query(filter, &request).await?;

        let mut batch: Vec<TreeEntry> =
            response.items.into_iter().map(TreeEntry::Archive).collect();
        if ((materialized + batch.len()) as u64) < response.total_items {
            batch.push(TreeEntry::LoadMore {
                next_page: page + 1,
            });
        }
        Ok(batch)
    }
}

/// The live entries among the slots, in order.
fn live_entries(slots: &[Slot]) -> Vec<TreeEntry> {
    slots
        .iter()
        .filter_map(|slot| match slot {
            Slot::Live(entry) => Some(entry.clone()),
            Slot::Deleted(_) => None,
        })
        .collect()
}

/// Insert one entry into the slots, preserving order and uniqueness.
///
/// A load-more entry is appended at the end unconditionally. An archive
/// is inserted before the first live archive with a greater `internal_id`
/// and never behind a marker; it is dropped entirely when any slot,
/// tombstones included, already holds its id.
fn merge_insert(slots: &mut Vec<Slot>, entry: TreeEntry) {
    let archive = match entry {
        TreeEntry::LoadMore { .. } => {
            slots.push(Slot::Live(entry));
            return;
        }
        TreeEntry::Archive(archive) => archive,
    };

    let mut insert_at = slots.len();
    for (index, slot) in slots.iter().enumerate() {
        match slot {
            Slot::Live(TreeEntry::Archive(existing)) => {
                if existing.internal_id > archive.internal_id {
                    insert_at = index;
                    break;
                }
                if existing.id == archive.id {
                    return;
                }
            }
            Slot::Live(TreeEntry::LoadMore { .. }) => {
                insert_at = index;
                break;
            }
            Slot::Deleted(deleted) => {
                // Deleted stays deleted.
                if *deleted == archive.id {
                    return;
                }
            }
        }
    }
    slots.insert(insert_at, Slot::Live(TreeEntry::Archive(archive)));
}
