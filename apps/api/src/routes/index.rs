use axum::response::Html;
use tower_sessions::Session;

use crate::errors::AppError;
use crate::session::SessionId;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// GET /
/// Issues the session identifier on first visit and serves the landing page.
pub async fn index_handler(session: Session) -> Result<Html<&'static str>, AppError> {
    SessionId::ensure(&session).await?;
    Ok(Html(INDEX_HTML))
}
