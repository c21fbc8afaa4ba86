use super::RequestsLoggingLevel;
use std::path::PathBuf;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// Path of the catalog CSV file, re-read on admin refit.
    pub catalog_path: PathBuf,
    /// Number of recommendations when the caller does not pass `k`.
    pub default_k: usize,
    /// Upper bound on the caller-supplied `k`.
    pub max_k: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            catalog_path: PathBuf::from("songs_features.csv"),
            default_k: 5,
            max_k: 50,
        }
    }
}
