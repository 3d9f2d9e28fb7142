//! Root endpoint - liveness message for humans poking the API

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Root response
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "notectl API is running!",
    })
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
