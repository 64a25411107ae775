//! Video catalog API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use viewdiful_core::{CatalogError, VideoRecord};

use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

/// Query parameters for `GET /videos`.
///
/// Both arrive as raw strings: a non-numeric value is not an error, it
/// falls back to the engine defaults.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /video/{id}
///
/// Look up a single video by id, case-insensitively.
pub async fn get_video(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.catalog().get_by_id(&id) {
        Ok(video) => Json(video).into_response(),
        Err(CatalogError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "Video not found").into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// GET /videos
///
/// A page of the catalog in freshly shuffled order. Every request
/// re-shuffles; two identical requests need not agree.
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Json<Vec<VideoRecord>> {
    let page = parse_or_zero(params.page.as_deref());
    let limit = parse_or_zero(params.limit.as_deref());
    Json(state.catalog().page(page, limit))
}

/// GET /search
///
/// Title substring search with an optional exact-id override.
pub async fn search_videos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<VideoRecord>> {
    Json(state.catalog().search(&params.q, &params.id))
}

/// GET /random
///
/// One uniformly drawn video. An empty catalog is a deployment problem,
/// not a caller error.
pub async fn random_video(State(state): State<Arc<AppState>>) -> Response {
    match state.catalog().random_one() {
        Ok(video) => Json(video).into_response(),
        Err(CatalogError::Empty) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Catalog is empty").into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Parse an optional numeric parameter; anything unusable becomes 0,
/// which the query engine maps to its own defaults.
fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}
