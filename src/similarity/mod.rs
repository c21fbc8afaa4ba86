mod cosine;

pub use cosine::{CosineIndex, Neighbor};
