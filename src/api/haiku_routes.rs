//! Haiku API routes
//!
//! Single generation endpoint plus a liveness probe. State is the shared
//! [`HaikuGenerator`]; all provider access goes through it.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::error::HaikuError;
use crate::haiku::{Haiku, HaikuGenerator};

/// Usage guidance returned when the keyword is missing or empty.
pub const USAGE_HINT: &str =
    "provide a keyword, e.g. /api/haiku?keyword=ocean (optionally &starts_with=s)";

/// Query parameters for the haiku endpoint
#[derive(Debug, Deserialize)]
pub struct HaikuQuery {
    pub keyword: Option<String>,
    /// Only the first character is honored.
    pub starts_with: Option<String>,
}

/// GET /api/haiku?keyword=ocean&starts_with=s
/// Returns the three assembled lines as `{"lines": [...]}`.
pub async fn generate_haiku(
    State(generator): State<Arc<HaikuGenerator>>,
    Query(params): Query<HaikuQuery>,
) -> Result<Json<Haiku>, (StatusCode, String)> {
    let keyword = params.keyword.unwrap_or_default();
    let starts_with = params.starts_with.as_deref().and_then(|s| s.chars().next());

    info!(keyword = %keyword, ?starts_with, "haiku requested");

    match generator.generate(&keyword, starts_with).await {
        Ok(haiku) => Ok(Json(haiku)),
        Err(HaikuError::EmptyKeyword) => Err((StatusCode::BAD_REQUEST, USAGE_HINT.to_string())),
        Err(e @ HaikuError::Starved { .. }) => {
            // Thin or unavailable provider data; the request itself was fine.
            Err((StatusCode::SERVICE_UNAVAILABLE, e.to_string()))
        }
    }
}

/// GET /api/health - liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create the haiku router
pub fn create_haiku_router(generator: Arc<HaikuGenerator>) -> Router {
    Router::new()
        .route("/api/haiku", get(generate_haiku))
        .route("/api/health", get(health))
        .with_state(generator)
}
