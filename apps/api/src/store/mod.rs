//! Data Store Adapter: reference options per branch and the recommendation log.
//!
//! Every `sqlx::Error` is converted to `StoreError` here; callers decide how to
//! degrade. Each call checks out one pooled connection and returns it on drop,
//! so release happens on every exit path.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::options::{BranchOptions, ClubRow, ElectiveRow, InternshipRow};
use crate::models::recommendation::{NewRecommendation, RecommendationRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data store is not connected")]
    Unavailable,

    #[error("data store query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Persistence seam used by the orchestrators. Carried in `AppState` as
/// `Arc<dyn RecommendationStore>`.
#[async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Diagnostic flag for `/health`.
    fn is_available(&self) -> bool;

    /// Reference options stored for `branch` (case-insensitive match).
    /// May return fewer than three per category, or none.
    async fn fetch_options(&self, branch: &str) -> Result<BranchOptions, StoreError>;

    async fn save_recommendation(&self, record: &NewRecommendation) -> Result<(), StoreError>;

    /// Newest first, at most `limit` rows.
    async fn fetch_history(
        &self,
        session_id: &str,
        limit: i64,
    ) -> Result<Vec<RecommendationRecord>, StoreError>;
}

/// PostgreSQL-backed store. Built without a pool when the database was
/// unreachable at startup; every call then reports `StoreError::Unavailable`.
#[derive(Clone)]
pub struct PgStore {
    pool: Option<PgPool>,
}

impl PgStore {
    pub fn new(pool: Option<PgPool>) -> Self {
        Self { pool }
    }

    fn pool(&self) -> Result<&PgPool, StoreError> {
        self.pool.as_ref().ok_or(StoreError::Unavailable)
    }
}

#[async_trait]
impl RecommendationStore for PgStore {
    fn is_available(&self) -> bool {
        self.pool.is_some()
    }

    async fn fetch_options(&self, branch: &str) -> Result<BranchOptions, StoreError> {
        let mut conn = self.pool()?.acquire().await?;

        let electives = sqlx::query_as::<_, ElectiveRow>(
            "SELECT name, prerequisites, description FROM electives \
             WHERE LOWER(branch) = LOWER($1) ORDER BY id",
        )
        .bind(branch)
        .fetch_all(&mut *conn)
        .await?;

        let clubs = sqlx::query_as::<_, ClubRow>(
            "SELECT name, description, activities FROM clubs \
             WHERE LOWER(branch) = LOWER($1) ORDER BY id",
        )
        .bind(branch)
        .fetch_all(&mut *conn)
        .await?;

        let internships = sqlx::query_as::<_, InternshipRow>(
            "SELECT name, skills_required, description, company_type FROM internships \
             WHERE LOWER(branch) = LOWER($1) ORDER BY id",
        )
        .bind(branch)
        .fetch_all(&mut *conn)
        .await?;

        Ok(BranchOptions {
            electives: electives.into_iter().filter_map(ElectiveRow::into_option).collect(),
            clubs: clubs.into_iter().filter_map(ClubRow::into_option).collect(),
            internships: internships
                .into_iter()
                .filter_map(InternshipRow::into_option)
                .collect(),
        })
    }

    async fn save_recommendation(&self, record: &NewRecommendation) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO recommendations (session_id, branch, interests, goals, recommendation)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&record.session_id)
        .bind(&record.branch)
        .bind(&record.interests)
        .bind(&record.goals)
        .bind(&record.recommendation)
        .execute(self.pool()?)
        .await?;

        Ok(())
    }

    async fn fetch_history(
        &self,
        session_id: &str,
        limit: i64,
    ) -> Result<Vec<RecommendationRecord>, StoreError> {
        Ok(sqlx::query_as::<_, RecommendationRecord>(
            r#"
            SELECT branch, interests, goals, recommendation, created_at
            FROM recommendations
            WHERE session_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(session_id)
        .bind(limit)
        .fetch_all(self.pool()?)
        .await?)
    }
}
