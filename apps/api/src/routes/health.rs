use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Greeting and liveness probe with the service version.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Analyzer API is running",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-analyzer-api"
    }))
}
