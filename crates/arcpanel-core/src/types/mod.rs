//! Core type definitions used across the ArcPanel workspace.

pub mod filter;
pub mod id;
pub mod pagination;

pub use filter::ArchiveFilter;
pub use id::{ArchiveId, FileId};
pub use pagination::{PageRequest, PageResponse};
