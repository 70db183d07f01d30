//! Archive listing CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use arcpanel_core::config::AppConfig;
use arcpanel_core::error::AppError;
use arcpanel_core::types::{ArchiveFilter, PageRequest};
use arcpanel_entity::Archive;
use arcpanel_store::ArchiveStore;

use crate::output::{self, OutputFormat};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page to fetch (0-based)
    #[arg(short, long, default_value_t = 0)]
    pub page: u64,

    /// Substring the title or description must contain
    #[arg(short, long)]
    pub term: Option<String>,

    /// Keep only archives with downloadable files
    #[arg(short, long)]
    pub with_files: bool,
}

impl ListArgs {
    /// The filter these arguments describe, or `None` for the default
    /// view (which implicitly keeps archives with files only).
    fn filter(&self) -> Option<ArchiveFilter> {
        if self.term.is_none() && !self.with_files {
            return None;
        }
        Some(ArchiveFilter::new(self.term.clone(), self.with_files))
    }
}

/// Archive display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ArchiveRow {
    /// Internal sequence number
    seq: u64,
    /// Archive ID
    id: String,
    /// Title
    title: String,
    /// Description
    description: String,
    /// File count, or "-" without downloadable content
    files: String,
    /// Last updated
    last_updated: String,
}

impl From<&Archive> for ArchiveRow {
    fn from(archive: &Archive) -> Self {
        Self {
            seq: archive.internal_id,
            id: archive.id.to_string(),
            title: archive.title.clone(),
            description: archive.description.clone(),
            files: match &archive.files {
                Some(files) => files.len().to_string(),
                None => "-".to_string(),
            },
            last_updated: archive.last_updated.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute the list command
pub async fn execute(
    args: &ListArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::build_store(config);
    let filter = args.filter();
    let request = PageRequest::new(args.page, config.data.page_size);
    let response = store.query(filter.as_ref(), &request).await?;

    let rows: Vec<ArchiveRow> = response.items.iter().map(ArchiveRow::from).collect();
    output::print_list(&rows, format);

    if format == OutputFormat::Table {
        println!(
            "Page {} of {} ({} matching)",
            response.page, response.total_pages, response.total_items
        );
    }
    Ok(())
}
