use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::catalog::{load_catalog, FEATURE_COUNT};
use crate::recommend::Recommender;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::recommendations::{error_response, make_recommendation_routes};
use super::{log_requests, state::ServerState, RequestsLoggingLevel, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub songs: usize,
    pub features: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn status(State(state): State<ServerState>) -> impl IntoResponse {
    let recommender = state.snapshot();
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: env!("GIT_HASH").to_owned(),
        songs: recommender.catalog().len(),
        features: FEATURE_COUNT,
    };
    Json(stats)
}

async fn get_song(State(state): State<ServerState>, Path(id): Path<String>) -> Response {
    let recommender = state.snapshot();
    match recommender.catalog().get_song(&id) {
        Some(song) => Json(song).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list_song_ids(State(state): State<ServerState>) -> impl IntoResponse {
    Json(state.snapshot().catalog().song_ids())
}

#[derive(Serialize)]
struct RefitResponse {
    pub songs: usize,
}

/// Reload the catalog file, refit, and atomically publish the new
/// recommender. In-flight queries keep the previous snapshot.
async fn refit(State(state): State<ServerState>) -> Response {
    let catalog_path = state.config.catalog_path.clone();
    let fitted = tokio::task::spawn_blocking(move || -> anyhow::Result<Recommender> {
        let catalog = load_catalog(&catalog_path)?;
        Ok(Recommender::fit(Arc::new(catalog))?)
    })
    .await;

    match fitted {
        Ok(Ok(recommender)) => {
            let songs = recommender.catalog().len();
            state.publish(Arc::new(recommender));
            info!("Refitted recommender over {} songs", songs);
            Json(RefitResponse { songs }).into_response()
        }
        Ok(Err(err)) => {
            error!("Refit failed: {:#}", err);
            match err.downcast_ref::<crate::error::RecommendError>() {
                Some(recommend_err) => error_response(recommend_err),
                None => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": format!("{:#}", err) })),
                )
                    .into_response(),
            }
        }
        Err(join_err) => {
            error!("Refit task panicked: {:?}", join_err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn make_app(config: ServerConfig, recommender: Arc<Recommender>) -> Result<Router> {
    let state = ServerState::new(config, recommender);

    let catalog_routes: Router = Router::new()
        .route("/song/{id}", get(get_song))
        .route("/songs", get(list_song_ids))
        .with_state(state.clone());

    let admin_routes: Router = Router::new()
        .route("/refit", post(refit))
        .with_state(state.clone());

    let app: Router = Router::new()
        .route("/", get(status))
        .route("/v1/status", get(status))
        .with_state(state.clone())
        .nest("/v1/catalog", catalog_routes)
        .nest("/v1/recommendations", make_recommendation_routes(state.clone()))
        .nest("/v1/admin", admin_routes)
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(
    recommender: Arc<Recommender>,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    catalog_path: std::path::PathBuf,
    default_k: usize,
    max_k: usize,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
        catalog_path,
        default_k,
        max_k,
    };
    let app = make_app(config, recommender)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
