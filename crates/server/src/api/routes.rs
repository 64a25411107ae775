use axum::{middleware::from_fn, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::{handlers, middleware, sitemap, videos};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Responses are public, read-only data; any origin may fetch them.
    let cors = CorsLayer::new().allow_origin(Any);

    Router::new()
        .route("/video/{id}", get(videos::get_video))
        .route("/videos", get(videos::list_videos))
        .route("/search", get(videos::search_videos))
        .route("/random", get(videos::random_video))
        .route("/sitemap.xml", get(sitemap::sitemap))
        // Observability
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(from_fn(middleware::metrics_middleware))
        .layer(cors)
        .with_state(state)
}
