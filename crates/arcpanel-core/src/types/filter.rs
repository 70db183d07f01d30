//! Filter criteria applied to archive queries.

use serde::{Deserialize, Serialize};

/// Criteria restricting which archives a query returns.
///
/// The default filter keeps only archives that carry downloadable files
/// and applies no title restriction. A query that is given no filter at
/// all behaves exactly as if it had been given `ArchiveFilter::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveFilter {
    /// Case-sensitive substring the archive title must contain.
    ///
    /// `None` and the empty string both mean "no title restriction".
    pub term: Option<String>,
    /// When `true`, only archives with downloadable files are kept.
    pub has_files: bool,
}

impl Default for ArchiveFilter {
    fn default() -> Self {
        Self {
            term: None,
            has_files: true,
        }
    }
}

impl ArchiveFilter {
    /// Create a filter from explicit criteria.
    pub fn new(term: Option<String>, has_files: bool) -> Self {
        Self { term, has_files }
    }

    /// Shorthand for a title-substring filter that keeps the default
    /// files restriction.
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            has_files: true,
        }
    }

    /// The title restriction actually in effect.
    ///
    /// Returns `None` when no term was given or the given term is empty,
    /// so callers never have to distinguish the two.
    pub fn effective_term(&self) -> Option<&str> {
        match self.term.as_deref() {
            None | Some("") => None,
            Some(term) => Some(term),
        }
    }
}
