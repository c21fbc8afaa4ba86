//! Catalog loading from a CSV table.

use super::{Catalog, SongRecord, FEATURE_COLUMNS, METADATA_COLUMNS};
use crate::error::RecommendError;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

fn missing_columns(headers: &csv::StringRecord) -> Vec<String> {
    let present: HashSet<&str> = headers.iter().collect();
    METADATA_COLUMNS
        .iter()
        .chain(FEATURE_COLUMNS.iter())
        .filter(|column| !present.contains(**column))
        .map(|column| column.to_string())
        .collect()
}

/// Load the song catalog from a CSV file with a header row.
///
/// Required columns are `song_id`, `title`, `artist` and the eight audio
/// feature columns; extra columns are ignored. Column order does not matter.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open catalog file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read catalog headers from {}", path.display()))?
        .clone();

    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(RecommendError::MissingFeatureColumns { columns: missing }.into());
    }

    let mut songs: Vec<SongRecord> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    for (row, record) in reader.deserialize::<SongRecord>().enumerate() {
        let song = record.with_context(|| {
            // +2: one for the header line, one for 1-based line numbers
            format!("Failed to parse catalog row at line {}", row + 2)
        })?;
        if !seen_ids.insert(song.song_id.clone()) {
            warn!(
                "Duplicate song_id {:?} in catalog, keeping the first occurrence",
                song.song_id
            );
            continue;
        }
        songs.push(song);
    }

    info!("Catalog has {} songs", songs.len());
    Ok(Catalog::new(songs))
}
