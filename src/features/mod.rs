mod matrix;
mod scaler;

pub use matrix::FeatureMatrix;
pub use scaler::{ScalerParams, StandardScaler};
