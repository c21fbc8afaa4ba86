//! Exact cosine-distance nearest-neighbor index.

use crate::error::{RecommendError, Result};
use crate::features::FeatureMatrix;
use rayon::prelude::*;
use serde::Serialize;

/// One ranked result: catalog position and cosine distance to the query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Neighbor {
    pub position: usize,
    pub distance: f64,
}

/// Flat, row-major index over the normalized feature matrix.
///
/// Built once per matrix; queries take `&self` and never mutate, so
/// concurrent readers need no coordination. The scan is exact: every row is
/// compared, results are sorted by ascending distance with ties broken by
/// ascending row position.
pub struct CosineIndex {
    matrix: FeatureMatrix,
    norms: Vec<f64>,
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

impl CosineIndex {
    pub fn build(matrix: FeatureMatrix) -> Self {
        let norms = matrix.iter_rows().map(norm).collect();
        CosineIndex { matrix, norms }
    }

    pub fn len(&self) -> usize {
        self.matrix.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.rows() == 0
    }

    pub fn dim(&self) -> usize {
        self.matrix.cols()
    }

    pub fn row(&self, position: usize) -> &[f64] {
        self.matrix.row(position)
    }

    /// Return the `k` rows nearest to `vector` by cosine distance.
    ///
    /// The query vector's own row, if it is part of the index, may appear in
    /// the results (typically first, at distance 0). A zero-norm vector on
    /// either side of a comparison fails with `DegenerateVector` instead of
    /// letting NaN leak into the ranking.
    pub fn query(&self, vector: &[f64], k: usize) -> Result<Vec<Neighbor>> {
        if vector.len() != self.dim() {
            return Err(RecommendError::DimensionMismatch {
                expected: self.dim(),
                actual: vector.len(),
            });
        }
        if k > self.len() {
            return Err(RecommendError::InsufficientRows {
                requested: k,
                available: self.len(),
            });
        }
        if k == 0 {
            return Ok(Vec::new());
        }

        let query_norm = norm(vector);
        if query_norm == 0.0 {
            return Err(RecommendError::DegenerateVector { position: None });
        }

        let mut neighbors: Vec<Neighbor> = (0..self.len())
            .into_par_iter()
            .map(|position| {
                let row_norm = self.norms[position];
                if row_norm == 0.0 {
                    return Err(RecommendError::DegenerateVector {
                        position: Some(position),
                    });
                }
                let similarity = dot(vector, self.matrix.row(position)) / (query_norm * row_norm);
                Ok(Neighbor {
                    position,
                    distance: 1.0 - similarity,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        neighbors.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.position.cmp(&b.position))
        });
        neighbors.truncate(k);
        Ok(neighbors)
    }
}
