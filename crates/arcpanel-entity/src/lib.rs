//! # arcpanel-entity
//!
//! Domain entity models for ArcPanel. Every struct in this crate is a
//! value object from the sample dataset: archives and the files they own.
//! All entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod archive;
pub mod file;

pub use archive::Archive;
pub use file::FileAsset;
