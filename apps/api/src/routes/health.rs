use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe used by the deployment platform and the UI's connection badge.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "MindfulCompanion Backend"
    }))
}
