//! # arcpanel-store
//!
//! Data access for ArcPanel: the [`ArchiveStore`] query contract, its
//! in-memory implementation, and the deterministic sample dataset
//! generator that populates it.

pub mod sample;
pub mod store;

pub use store::{ArchiveStore, MemoryArchiveStore};
