//! Fixture catalog used by the end-to-end tests.
//!
//! Six songs with hand-picked feature vectors: `song_a` and `song_b` are
//! nearly parallel in feature space, `song_c` points in an orthogonal
//! direction, and the `tempo` column is constant across the whole catalog
//! so the zero-variance guard is always exercised.

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

const CATALOG_CSV: &str = "\
song_id,title,artist,danceability,energy,speechiness,acousticness,instrumentalness,liveness,valence,tempo
song_a,Alpha,The Testers,1.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0
song_b,Beta,The Testers,0.9,0.1,0.0,0.0,0.0,0.0,0.0,0.0
song_c,Gamma,Jazz Trio,0.0,1.0,0.0,0.0,0.0,0.0,0.0,0.0
song_d,Delta,Jazz Trio,0.0,0.0,1.0,0.8,0.0,0.0,0.0,0.0
song_e,Epsilon,Quiet Quartet,0.0,0.0,0.8,1.0,0.0,0.0,0.0,0.0
song_f,Zeta,Quiet Quartet,0.0,0.0,0.0,0.0,1.0,0.5,0.5,0.0
";

/// Write the fixture catalog CSV into a fresh temp dir.
///
/// Returns the temp dir (keep it alive for the test's duration) and the
/// path of the CSV file inside it.
pub fn create_test_catalog() -> std::io::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("songs_features.csv");
    let mut file = std::fs::File::create(&path)?;
    file.write_all(CATALOG_CSV.as_bytes())?;
    file.flush()?;
    Ok((dir, path))
}
