use crate::recommend::Recommender;
use axum::extract::FromRef;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use super::ServerConfig;

/// The published recommender. Refit builds a fresh `Recommender` and swaps
/// the inner `Arc`; readers clone it first, so in-flight queries keep their
/// snapshot while new requests see the new index.
pub type SharedRecommender = Arc<RwLock<Arc<Recommender>>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub recommender: SharedRecommender,
}

impl ServerState {
    pub fn new(config: ServerConfig, recommender: Arc<Recommender>) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            recommender: Arc::new(RwLock::new(recommender)),
        }
    }

    /// Current recommender snapshot for a single request.
    pub fn snapshot(&self) -> Arc<Recommender> {
        self.recommender
            .read()
            .expect("recommender lock poisoned")
            .clone()
    }

    /// Atomically publish a freshly fitted recommender.
    pub fn publish(&self, recommender: Arc<Recommender>) {
        *self
            .recommender
            .write()
            .expect("recommender lock poisoned") = recommender;
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

impl FromRef<ServerState> for SharedRecommender {
    fn from_ref(input: &ServerState) -> Self {
        input.recommender.clone()
    }
}
