use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::store::RecommendationStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Both collaborators are built once at startup and may be in their "absent" state.
#[derive(Clone)]
pub struct AppState {
    /// `PgStore` in production; reports unavailable when the database never came up.
    pub store: Arc<dyn RecommendationStore>,
    /// `GeminiClient` in production; unconfigured without `GEMINI_API_KEY`.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
