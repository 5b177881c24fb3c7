use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

/// Upper bound on concurrently checked-out connections.
pub const POOL_SIZE: u32 = 5;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Idempotent DDL run at every startup.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS electives (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        branch VARCHAR(255) NOT NULL,
        prerequisites TEXT,
        description TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS clubs (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        branch VARCHAR(255) NOT NULL,
        description TEXT,
        activities TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS internships (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        branch VARCHAR(255) NOT NULL,
        skills_required TEXT,
        description TEXT,
        company_type VARCHAR(255),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS recommendations (
        id BIGSERIAL PRIMARY KEY,
        session_id VARCHAR(255) NOT NULL,
        branch VARCHAR(255) NOT NULL,
        interests TEXT,
        goals TEXT,
        recommendation TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_recommendations_session \
     ON recommendations (session_id, created_at DESC)",
];

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(POOL_SIZE)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the reference and recommendation tables if they are missing.
pub async fn initialize_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database tables initialized");
    Ok(())
}

/// Connects and prepares the schema, or returns `None` so the service can run
/// in fallback-only mode. Never fails startup.
pub async fn connect_optional(database_url: &str) -> Option<PgPool> {
    let pool = match create_pool(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            warn!("PostgreSQL not available: {e}");
            info!("Application will run without database persistence");
            return None;
        }
    };

    if let Err(e) = initialize_schema(&pool).await {
        warn!("Failed to initialize database schema: {e}");
    }

    Some(pool)
}
