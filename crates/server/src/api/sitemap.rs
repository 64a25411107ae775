//! Sitemap handler.

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};
use viewdiful_core::build_sitemap;

use crate::state::AppState;

/// GET /sitemap.xml
///
/// One `<url>` entry per catalog record, in storage order.
pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let xml = build_sitemap(&state.config().sitemap.base_url, state.catalog());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
}
