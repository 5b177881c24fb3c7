use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing is required: every value has a default or an explicit "unavailable" state.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// `None` means the generator stays unavailable for the whole process lifetime.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,
    pub session_secure_cookie: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: database_url_from_env(),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            log_dir: env_or("LOG_DIR", "logs"),
            session_secure_cookie: parse_flag(&env_or("SESSION_SECURE_COOKIE", "false")),
        })
    }
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from the `DB_*` parts.
fn database_url_from_env() -> String {
    if let Some(url) = optional_env("DATABASE_URL") {
        return url;
    }
    build_database_url(
        &env_or("DB_HOST", "localhost"),
        &env_or("DB_PORT", "5432"),
        &env_or("DB_USER", "postgres"),
        &env_or("DB_PASSWORD", "postgres"),
        &env_or("DB_NAME", "college_mentor"),
    )
}

fn build_database_url(host: &str, port: &str, user: &str, password: &str, name: &str) -> String {
    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}

/// Returns the variable only when it is set to something other than whitespace.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
