//! Archive store contract and its in-memory implementation.

use async_trait::async_trait;
use tracing::debug;

use arcpanel_core::config::data::DataConfig;
use arcpanel_core::result::AppResult;
use arcpanel_core::types::{ArchiveFilter, ArchiveId, PageRequest, PageResponse};
use arcpanel_entity::Archive;

use crate::sample;

/// Read-only query contract over the archive dataset.
///
/// Queries are pure: the same filter and page always return the same
/// result, and no method has side effects. Deleting an archive from the
/// tree is a view-level operation and never reaches the store, so a
/// deleted archive can still be returned by a later page query.
#[async_trait]
pub trait ArchiveStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return one page of archives matching the filter, ordered by
    /// `internal_id` ascending.
    ///
    /// An absent filter behaves exactly like [`ArchiveFilter::default()`]:
    /// only archives with downloadable content are returned.
    async fn query(
        &self,
        filter: Option<&ArchiveFilter>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Archive>>;

    /// Count the archives matching the filter across all pages.
    async fn count(&self, filter: Option<&ArchiveFilter>) -> AppResult<u64>;

    /// Look up a single archive by id, ignoring any filter.
    async fn get(&self, id: ArchiveId) -> AppResult<Option<Archive>>;
}

/// In-memory [`ArchiveStore`] over an immutable, pre-sorted dataset.
#[derive(Debug, Clone)]
pub struct MemoryArchiveStore {
    /// Backing records, sorted by `internal_id` ascending.
    archives: Vec<Archive>,
}

impl MemoryArchiveStore {
    /// Create a store from explicit records.
    ///
    /// Records are sorted by `internal_id` so page slices come out in
    /// tree order no matter how the caller assembled the input.
    pub fn from_archives(mut archives: Vec<Archive>) -> Self {
        archives.sort_by_key(|archive| archive.internal_id);
        Self { archives }
    }

    /// Create a store populated with the generated sample dataset.
    pub fn with_samples(config: &DataConfig) -> Self {
        Self::from_archives(sample::generate(config))
    }

    fn matching<'a>(&'a self, filter: Option<&ArchiveFilter>) -> Vec<&'a Archive> {
        let default = ArchiveFilter::default();
        let filter = filter.unwrap_or(&default);
        self.archives
            .iter()
            .filter(|archive| archive.matches(filter))
            .collect()
    }
}

#[async_trait]
impl ArchiveStore for MemoryArchiveStore {
    async fn query(
        &self,
        filter: Option<&ArchiveFilter>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Archive>> {
        let matching = self.matching(filter);
        let total_items = matching.len() as u64;
        let items: Vec<Archive> = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        debug!(
            page = page.page,
            returned = items.len(),
            total = total_items,
            "Queried archive page"
        );
        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total_items,
        ))
    }

    async fn count(&self, filter: Option<&ArchiveFilter>) -> AppResult<u64> {
        Ok(self.matching(filter).len() as u64)
    }

    async fn get(&self, id: ArchiveId) -> AppResult<Option<Archive>> {
        Ok(self
            .archives
            .iter()
            .find(|archive| archive.id == id)
            .cloned())
    }
}
