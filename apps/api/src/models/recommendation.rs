use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::profile::BranchProfile;

const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of records `GET /get_history` returns at most.
pub const HISTORY_LIMIT: i64 = 5;

/// A stored recommendation, as read back for one session's history.
#[derive(Debug, Clone, FromRow)]
pub struct RecommendationRecord {
    pub branch: String,
    pub interests: Option<String>,
    pub goals: Option<String>,
    pub recommendation: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload. The timestamp is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecommendation {
    pub session_id: String,
    pub branch: String,
    pub interests: String,
    pub goals: String,
    pub recommendation: String,
}

impl NewRecommendation {
    pub fn new(session_id: &str, profile: &BranchProfile, recommendation: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            branch: profile.branch.clone(),
            interests: profile.interests.clone(),
            goals: profile.goals.clone(),
            recommendation: recommendation.to_string(),
        }
    }
}

/// One entry of the `GET /get_history` response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub branch: String,
    pub interests: String,
    pub goals: String,
    pub recommendation: String,
    pub created_at: String,
}

impl From<RecommendationRecord> for HistoryEntry {
    fn from(record: RecommendationRecord) -> Self {
        Self {
            branch: record.branch,
            interests: record.interests.unwrap_or_default(),
            goals: record.goals.unwrap_or_default(),
            recommendation: record.recommendation,
            created_at: record
                .created_at
                .format(HISTORY_TIMESTAMP_FORMAT)
                .to_string(),
        }
    }
}
