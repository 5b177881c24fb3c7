mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod recommendation;
mod routes;
mod session;
mod state;
mod store;
mod suggestions;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::connect_optional;
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{PgStore, RecommendationStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: the log filter and log directory come from it
    let config = Config::from_env()?;

    // Held for the process lifetime so buffered file logs are flushed on exit
    let _log_guard = init_tracing(&config);

    info!("Starting College Mentor API v{}", env!("CARGO_PKG_VERSION"));

    // Generator: unconfigured without GEMINI_API_KEY, for the whole process lifetime
    let generator = GeminiClient::new(config.gemini_api_key.clone());
    if generator.is_configured() {
        info!("Gemini client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("GEMINI_API_KEY not set, recommendations will use fallback content");
    }

    // Database: optional, the service runs in fallback-only mode without it
    let store = PgStore::new(connect_optional(&config.database_url).await);
    info!(
        "Database: {}",
        if store.is_available() { "available" } else { "not available" }
    );

    let state = AppState {
        store: Arc::new(store),
        generator: Arc::new(generator),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Console logging plus `<log_dir>/app.log`. If the log file cannot be opened
/// only the console layer is installed.
fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},tower_http={}",
            env!("CARGO_CRATE_NAME"),
            &config.rust_log,
            &config.rust_log
        ))
    });

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(&config.log_dir);

    let (file_layer, guard, file_error) = match file_appender {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
                None,
            )
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!("File logging disabled, could not open {}/app.log: {e}", config.log_dir);
    }

    guard
}
