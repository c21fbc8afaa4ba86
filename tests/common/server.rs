//! Test server lifecycle management
//!
//! Spawns an isolated HTTP server per test, each with its own fixture
//! catalog in a temp dir.

use super::fixtures::create_test_catalog;
use cadenza_recommender_server::recommend::Recommender;
use cadenza_recommender_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use cadenza_recommender_server::{load_catalog, Catalog};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated catalog.
///
/// When dropped, the server shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    // Private fields - keep resources alive until drop
    _temp_catalog_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a test server on a random port over the fixture catalog.
    ///
    /// # Panics
    ///
    /// Panics if the catalog cannot be written or loaded, fitting fails,
    /// or the port cannot be bound.
    pub async fn spawn() -> Self {
        let (temp_catalog_dir, catalog_path) =
            create_test_catalog().expect("Failed to create test catalog");

        let catalog: Catalog = load_catalog(&catalog_path).expect("Failed to load test catalog");
        let recommender =
            Arc::new(Recommender::fit(Arc::new(catalog)).expect("Failed to fit recommender"));

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port: 0,
            catalog_path,
            default_k: 3,
            max_k: 10,
        };
        let app = make_app(config, recommender).expect("Failed to build app");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to read local addr")
            .port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Test server failed");
        });

        TestServer {
            base_url: format!("http://127.0.0.1:{port}"),
            port,
            _temp_catalog_dir: temp_catalog_dir,
            _shutdown_tx: Some(shutdown_tx),
        }
    }
}
