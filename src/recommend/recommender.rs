//! The fit-once / query-many recommendation pipeline.

use crate::catalog::{Catalog, SongRecord, FEATURE_COUNT};
use crate::error::{RecommendError, Result};
use crate::features::{FeatureMatrix, StandardScaler};
use crate::similarity::CosineIndex;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// One recommended song with its cosine distance to the query song.
#[derive(Clone, Debug, Serialize)]
pub struct Recommendation {
    pub song: SongRecord,
    pub distance: f64,
}

/// Immutable fitted model: the catalog, its normalized feature matrix and
/// the similarity index built over it.
///
/// Queries take `&self`, so a shared `Arc<Recommender>` can serve any number
/// of concurrent callers. Refitting on an updated catalog builds a fresh
/// `Recommender` and swaps the shared reference; in-flight queries keep
/// their snapshot.
pub struct Recommender {
    catalog: Arc<Catalog>,
    scaler: StandardScaler,
    index: CosineIndex,
}

impl Recommender {
    /// Normalize the catalog's raw features and build the similarity index.
    pub fn fit(catalog: Arc<Catalog>) -> Result<Self> {
        let raw_rows: Vec<Vec<f64>> = catalog
            .iter_songs()
            .map(|song| song.feature_vector().to_vec())
            .collect();
        let raw = FeatureMatrix::from_rows(raw_rows, FEATURE_COUNT)?;
        let (normalized, scaler) = StandardScaler::fit(&raw);
        let index = CosineIndex::build(normalized);
        debug!(
            "Fitted recommender over {} songs, {} features",
            index.len(),
            index.dim()
        );
        Ok(Recommender {
            catalog,
            scaler,
            index,
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Recommend the `k` songs most similar to `song_id`, never including
    /// the song itself.
    pub fn recommend(&self, song_id: &str, k: usize) -> Result<Vec<Recommendation>> {
        let position = self
            .catalog
            .position_of(song_id)
            .ok_or_else(|| RecommendError::SongNotFound(song_id.to_string()))?;

        if k == 0 {
            return Ok(Vec::new());
        }
        // Over-fetch by one for self-exclusion, so the song itself must not
        // count against the available rows.
        if k + 1 > self.index.len() {
            return Err(RecommendError::InsufficientRows {
                requested: k,
                available: self.index.len().saturating_sub(1),
            });
        }

        let vector = self.index.row(position).to_vec();
        let mut neighbors = self.index.query(&vector, k + 1)?;

        // Drop the query song's own row. With duplicate vectors the own row
        // can lose the tie-break and miss the top k+1; drop the farthest
        // result instead so exactly k recommendations remain.
        match neighbors.iter().position(|n| n.position == position) {
            Some(own) => {
                neighbors.remove(own);
            }
            None => {
                neighbors.pop();
            }
        }

        Ok(neighbors
            .into_iter()
            .map(|neighbor| Recommendation {
                song: self.catalog.get(neighbor.position).cloned().expect(
                    "index positions always map to catalog rows",
                ),
                distance: neighbor.distance,
            })
            .collect())
    }
}
