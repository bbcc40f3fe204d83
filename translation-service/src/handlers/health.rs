use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Liveness probe. Always succeeds; pipelines load lazily on first use.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "translation-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
