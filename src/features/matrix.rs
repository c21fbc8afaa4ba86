use crate::error::{RecommendError, Result};

/// Row-major n×f matrix of numeric feature values.
///
/// Row i corresponds to catalog position i. Construction validates the shape
/// once; afterwards the matrix is immutable and every row has the same width.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureMatrix {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl FeatureMatrix {
    /// Build a matrix from per-row vectors, validating shape and finiteness.
    pub fn from_rows(rows: Vec<Vec<f64>>, expected_cols: usize) -> Result<Self> {
        if rows.is_empty() {
            return Err(RecommendError::InvalidInputShape {
                expected: format!("at least 1 row of {} column(s)", expected_cols),
                actual: "0 rows".to_string(),
            });
        }
        let mut values = Vec::with_capacity(rows.len() * expected_cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected_cols {
                return Err(RecommendError::InvalidInputShape {
                    expected: format!("{} column(s)", expected_cols),
                    actual: format!("{} column(s) at row {}", row.len(), i),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(RecommendError::InvalidInputShape {
                        expected: "finite numeric values".to_string(),
                        actual: format!("{} at row {}, column {}", value, i, j),
                    });
                }
                values.push(value);
            }
        }
        Ok(FeatureMatrix {
            values,
            rows: rows.len(),
            cols: expected_cols,
        })
    }

    pub(crate) fn from_raw_parts(values: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        FeatureMatrix { values, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.values[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.cols)
    }
}
