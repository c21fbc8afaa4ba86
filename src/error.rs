//! Error taxonomy shared by the catalog, normalizer, index and query layers.
//!
//! Every variant is terminal for the call that produced it; nothing in the
//! pipeline retries internally. `SongNotFound` is the user-facing "not in
//! catalog" case and must stay distinguishable from data-shape problems so
//! callers can report them differently.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecommendError {
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: String, actual: String },

    #[error("Catalog is missing required column(s): {}", .columns.join(", "))]
    MissingFeatureColumns { columns: Vec<String> },

    #[error("Vector has {actual} component(s) but the index dimensionality is {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Requested {requested} neighbor(s) but only {available} row(s) are available")]
    InsufficientRows { requested: usize, available: usize },

    #[error("{}", degenerate_vector_msg(.position))]
    DegenerateVector { position: Option<usize> },

    #[error("Song {0:?} not found in catalog")]
    SongNotFound(String),
}

fn degenerate_vector_msg(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(
            "Cosine distance is undefined: indexed row at position {} has zero norm",
            p
        ),
        None => "Cosine distance is undefined: query vector has zero norm".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;
