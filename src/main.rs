//! Translation Microservice server.
//!
//! # Usage
//!
//! ```bash
//! # Start the server with the mock phrase table
//! translation-service
//!
//! # Or with Google Translate and a custom port
//! TRANSLATION_BACKEND=google GOOGLE_API_KEY=... PORT=8080 translation-service
//! ```

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use translation_service::api::{self, AppState};
use translation_service::config::Config;
use translation_service::log_store::LogStore;
use translation_service::phrasebook::PhraseTable;
use translation_service::translator::TranslationService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the default filter
    let config = Config::load()?;

    // Initialize logging - use RUST_LOG env var, defaulting to LOG_LEVEL
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("translation_service={}", config.log_level))
        }))
        .init();

    let translator = TranslationService::new(
        config.translation_backend,
        config.google_api_key.as_deref(),
        &config.provider_api_url,
        PhraseTable::builtin(),
    );

    let log_store = if config.use_database {
        LogStore::open(&config.database_path)
    } else {
        LogStore::in_memory()
    };

    let state = Arc::new(AppState::new(
        translator,
        log_store,
        config.max_text_length,
        config.max_bulk_size,
    ));
    let app = api::router(state);

    let addr = SocketAddr::new(config.host, config.port);
    info!("Translation service starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
