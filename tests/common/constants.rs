//! Shared identifiers for the fixture catalog.

/// Song with a feature vector pointing almost entirely at `danceability`.
pub const SONG_A_ID: &str = "song_a";

/// Nearly parallel to `SONG_A_ID` in feature space.
pub const SONG_B_ID: &str = "song_b";

/// Orthogonal direction to `SONG_A_ID`.
pub const SONG_C_ID: &str = "song_c";

/// Number of songs in the fixture catalog.
pub const CATALOG_SIZE: usize = 6;
