use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

fn availability(available: bool) -> &'static str {
    if available {
        "available"
    } else {
        "unavailable"
    }
}

/// GET /health
/// Reports generator and database availability. No side effects.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "college-mentor-api",
        "version": env!("CARGO_PKG_VERSION"),
        "gemini_api": availability(state.generator.is_configured()),
        "database": availability(state.store.is_available()),
    }))
}
