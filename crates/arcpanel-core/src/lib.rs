//! # arcpanel-core
//!
//! Core crate for ArcPanel. Contains the unified error system, typed
//! identifiers, the archive filter value type, pagination types, and the
//! configuration schemas.
//!
//! This crate has **no** internal dependencies on other ArcPanel crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
