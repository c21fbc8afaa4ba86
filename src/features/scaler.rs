//! Z-score normalization of the raw feature matrix.

use super::FeatureMatrix;
use crate::error::{RecommendError, Result};

/// Per-column mean and standard deviation computed at fit time.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalerParams {
    pub means: Vec<f64>,
    pub std_devs: Vec<f64>,
}

/// Per-column z-score scaler.
///
/// Fitting computes the population mean and standard deviation of every
/// column and returns the normalized matrix alongside the fitted scaler.
/// The scaler keeps its parameters so later vectors can be projected into
/// the same normalized space.
#[derive(Clone, Debug)]
pub struct StandardScaler {
    params: ScalerParams,
}

impl StandardScaler {
    pub fn fit(raw: &FeatureMatrix) -> (FeatureMatrix, StandardScaler) {
        let n = raw.rows() as f64;
        let cols = raw.cols();

        let mut means = vec![0.0; cols];
        for row in raw.iter_rows() {
            for (j, &value) in row.iter().enumerate() {
                means[j] += value;
            }
        }
        for mean in means.iter_mut() {
            *mean /= n;
        }

        let mut variances = vec![0.0; cols];
        for row in raw.iter_rows() {
            for (j, &value) in row.iter().enumerate() {
                let delta = value - means[j];
                variances[j] += delta * delta;
            }
        }
        let std_devs: Vec<f64> = variances.iter().map(|v| (v / n).sqrt()).collect();

        let scaler = StandardScaler {
            params: ScalerParams { means, std_devs },
        };

        let mut values = Vec::with_capacity(raw.rows() * cols);
        for row in raw.iter_rows() {
            scaler.scale_into(row, &mut values);
        }
        let normalized = FeatureMatrix::from_raw_parts(values, raw.rows(), cols);
        (normalized, scaler)
    }

    pub fn params(&self) -> &ScalerParams {
        &self.params
    }

    /// Project a raw vector into the fitted normalized space.
    pub fn transform(&self, raw: &[f64]) -> Result<Vec<f64>> {
        if raw.len() != self.params.means.len() {
            return Err(RecommendError::DimensionMismatch {
                expected: self.params.means.len(),
                actual: raw.len(),
            });
        }
        let mut out = Vec::with_capacity(raw.len());
        self.scale_into(raw, &mut out);
        Ok(out)
    }

    fn scale_into(&self, raw: &[f64], out: &mut Vec<f64>) {
        for (j, &value) in raw.iter().enumerate() {
            let sigma = self.params.std_devs[j];
            // A constant column carries no information, map it to 0 instead
            // of dividing by zero.
            if sigma == 0.0 {
                out.push(0.0);
            } else {
                out.push((value - self.params.means[j]) / sigma);
            }
        }
    }
}
