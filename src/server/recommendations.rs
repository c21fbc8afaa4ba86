//! Recommendation API routes

use crate::error::RecommendError;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::state::ServerState;

#[derive(Deserialize, Debug)]
pub struct RecommendParams {
    pub k: Option<usize>,
}

/// Map a pipeline error to an HTTP response, keeping "song not in catalog"
/// distinguishable from catalog-data problems.
pub(super) fn error_response(err: &RecommendError) -> Response {
    let status = match err {
        RecommendError::SongNotFound(_) => StatusCode::NOT_FOUND,
        RecommendError::InsufficientRows { .. } | RecommendError::MissingFeatureColumns { .. } => {
            StatusCode::BAD_REQUEST
        }
        RecommendError::InvalidInputShape { .. }
        | RecommendError::DimensionMismatch { .. }
        | RecommendError::DegenerateVector { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
        .into_response()
}

async fn get_recommendations(
    State(state): State<ServerState>,
    Path(song_id): Path<String>,
    Query(params): Query<RecommendParams>,
) -> Response {
    let k = params.k.unwrap_or(state.config.default_k);
    if k == 0 || k > state.config.max_k {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": format!("k must be between 1 and {}", state.config.max_k)
            })),
        )
            .into_response();
    }

    let recommender = state.snapshot();
    match recommender.recommend(&song_id, k) {
        Ok(recommendations) => Json(recommendations).into_response(),
        Err(err) => error_response(&err),
    }
}

pub fn make_recommendation_routes(state: ServerState) -> Router {
    Router::new()
        .route("/{song_id}", get(get_recommendations))
        .with_state(state)
}
