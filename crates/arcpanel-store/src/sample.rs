//! Deterministic sample dataset generation.

use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use uuid::Uuid;

use arcpanel_core::config::data::DataConfig;
use arcpanel_core::types::{ArchiveId, FileId};
use arcpanel_entity::{Archive, FileAsset};

/// Alphabet for generated file payloads.
const CONTENT_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
/// Length of generated file payloads.
const CONTENT_LEN: usize = 5;

/// Generate the sample dataset.
///
/// Produces `sample_count` archives titled `Archive {internal_id}` with a
/// fixed description. Roughly half of the archives get downloadable
/// content: a list of up to `max_files_per_archive` files named `File 1`,
/// `File 2`, and so on, each carrying a short fake payload. The list may
/// come out empty, which still counts as downloadable content.
///
/// All randomness flows from `config.seed`, so the same configuration
/// always produces the same dataset, UUIDs included.
pub fn generate(config: &DataConfig) -> Vec<Archive> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut archives = Vec::with_capacity(config.sample_count as usize);

    for internal_id in 1..=config.sample_count {
        let files = rng.random_bool(0.5).then(|| {
            let count = rng.random_range(0..=config.max_files_per_archive);
            (1..=count)
                .map(|index| FileAsset {
                    id: FileId::from_uuid(random_uuid(&mut rng)),
                    name: format!("File {index}"),
                    content: random_content(&mut rng),
                })
                .collect()
        });

        archives.push(Archive {
            id: ArchiveId::from_uuid(random_uuid(&mut rng)),
            internal_id,
            title: format!("Archive {internal_id}"),
            description: "Lorem Ipsum".to_string(),
            last_updated: timestamp_for(internal_id),
            files,
        });
    }

    debug!(
        count = archives.len(),
        seed = config.seed,
        "Generated sample archives"
    );
    archives
}

/// A v4 UUID whose random bytes come from the seeded generator instead of
/// the OS entropy source.
fn random_uuid(rng: &mut StdRng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

fn random_content(rng: &mut StdRng) -> String {
    (0..CONTENT_LEN)
        .map(|_| CONTENT_CHARSET[rng.random_range(0..CONTENT_CHARSET.len())] as char)
        .collect()
}

/// Spread `last_updated` values over plausible recent dates, one day apart.
fn timestamp_for(internal_id: u64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
        + TimeDelta::days(19_700 + internal_id as i64)
        + TimeDelta::hours((internal_id % 24) as i64)
}
