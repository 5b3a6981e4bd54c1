use axum::{http::Uri, response::Json};
use serde_json::{json, Value};

use crate::error::AppError;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Plain-text liveness probe
pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn route_not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound("route not found".to_string())
}
