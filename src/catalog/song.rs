use serde::{Deserialize, Serialize};

/// Metadata columns every catalog row must carry.
pub const METADATA_COLUMNS: [&str; 3] = ["song_id", "title", "artist"];

/// Audio feature columns, in the order they form the feature vector.
pub const FEATURE_COLUMNS: [&str; 8] = [
    "danceability",
    "energy",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "tempo",
];

pub const FEATURE_COUNT: usize = FEATURE_COLUMNS.len();

/// One catalog entry: identifier, display metadata and the raw audio features.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct SongRecord {
    pub song_id: String,
    pub title: String,
    pub artist: String,
    pub danceability: f64,
    pub energy: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
}

impl SongRecord {
    /// The raw feature tuple in `FEATURE_COLUMNS` order.
    pub fn feature_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.danceability,
            self.energy,
            self.speechiness,
            self.acousticness,
            self.instrumentalness,
            self.liveness,
            self.valence,
            self.tempo,
        ]
    }
}
