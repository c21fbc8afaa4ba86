//! Cadenza Recommender Server Library
//!
//! Content-based song recommendations: z-score normalize a catalog's audio
//! features, build a cosine-distance index over the normalized vectors, and
//! answer "songs similar to X" queries over HTTP or as a library call.

pub mod catalog;
pub mod error;
pub mod features;
pub mod recommend;
pub mod server;
pub mod similarity;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, Catalog, SongRecord};
pub use error::RecommendError;
pub use recommend::{Recommendation, Recommender};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
