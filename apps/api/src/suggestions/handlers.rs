use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::AppState;
use crate::suggestions::{suggest, DEFAULT_SUGGESTIONS};

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionForm {
    pub field: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
}

/// POST /get_suggestions
///
/// Never fails: an unreadable form degrades to a static list.
pub async fn handle_get_suggestions(
    State(state): State<AppState>,
    form: Result<Form<SuggestionForm>, FormRejection>,
) -> Json<SuggestionResponse> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(e) => {
            warn!("Unreadable suggestion form: {e}");
            return Json(SuggestionResponse {
                suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            });
        }
    };

    let suggestions = suggest(
        state.generator.as_ref(),
        form.field.as_deref(),
        form.query.as_deref(),
    )
    .await;

    Json(SuggestionResponse { suggestions })
}
