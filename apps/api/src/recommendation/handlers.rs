//! Axum route handlers for recommendations and history.

use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use serde::Serialize;
use tower_sessions::Session;
use tracing::warn;

use crate::errors::AppError;
use crate::models::profile::{RecommendationForm, MISSING_FIELDS_MESSAGE};
use crate::models::recommendation::HistoryEntry;
use crate::recommendation::orchestrator::{generate_recommendation, recent_history};
use crate::session::SessionId;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

/// POST /get_recommendations
///
/// Form fields: branch, year, interests-value, goals.
/// 400 on missing required fields; 500 only on unexpected faults.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<RecommendationForm>, FormRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Form(form) = form.map_err(|e| {
        warn!("Unreadable recommendation form: {e}");
        AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    let session_id = SessionId::ensure(&session).await?;

    let outcome = generate_recommendation(
        state.store.as_ref(),
        state.generator.as_ref(),
        session_id.as_str(),
        &form,
    )
    .await?;

    Ok(Json(RecommendationResponse {
        recommendation: outcome.text,
    }))
}

/// GET /get_history
///
/// Always 200. No session, a session error or a store outage all yield `[]`.
pub async fn handle_get_history(
    State(state): State<AppState>,
    session: Session,
) -> Json<HistoryResponse> {
    let session_id = match SessionId::current(&session).await {
        Ok(Some(id)) => id,
        Ok(None) => return Json(HistoryResponse { history: vec![] }),
        Err(e) => {
            warn!("Could not read session for history: {e}");
            return Json(HistoryResponse { history: vec![] });
        }
    };

    let history = recent_history(state.store.as_ref(), session_id.as_str()).await;
    Json(HistoryResponse { history })
}
