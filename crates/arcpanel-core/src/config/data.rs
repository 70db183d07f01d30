//! Sample dataset configuration.

use serde::{Deserialize, Serialize};

use crate::types::pagination::DEFAULT_PAGE_SIZE;

/// Settings controlling the generated sample dataset and paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Seed for the deterministic sample generator.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of archives to generate.
    #[serde(default = "default_sample_count")]
    pub sample_count: u64,
    /// Number of archives fetched per tree page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Upper bound (inclusive) on files generated per archive.
    #[serde(default = "default_max_files")]
    pub max_files_per_archive: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            sample_count: default_sample_count(),
            page_size: default_page_size(),
            max_files_per_archive: default_max_files(),
        }
    }
}

fn default_seed() -> u64 {
    42
}

fn default_sample_count() -> u64 {
    30
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_max_files() -> u64 {
    5
}
