use std::fmt;

use serde::{Deserialize, Serialize};
use tower_sessions::{session, Session};
use tracing::info;
use uuid::Uuid;

/// The only field this service keeps in the cookie-backed session.
const SESSION_KEY: &str = "session_id";

/// Opaque per-browser identifier that scopes recommendation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier stored in this session, if one was issued.
    pub async fn current(session: &Session) -> Result<Option<Self>, session::Error> {
        session.get::<SessionId>(SESSION_KEY).await
    }

    /// Returns the stored identifier, issuing a new one on first use.
    pub async fn ensure(session: &Session) -> Result<Self, session::Error> {
        if let Some(id) = Self::current(session).await? {
            return Ok(id);
        }
        let id = Self::generate();
        session.insert(SESSION_KEY, &id).await?;
        info!("New session started: {id}");
        Ok(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
