//! Translation REST API.
//!
//! # API Endpoints
//!
//! - `GET /` — service info and endpoint list
//! - `GET /health` — health check
//! - `POST /api/v1/translate` — translate one text
//! - `POST /api/v1/translate/bulk` — translate up to `MAX_BULK_SIZE` texts
//! - `GET /api/v1/logs?limit=&offset=` — recent translations, newest first
//! - `DELETE /api/v1/logs` — clear the translation log
//! - `GET /api/v1/logs/stats` — aggregate statistics
//! - `GET /api/v1/languages` — supported languages
//!
//! Each translation runs validate → resolve → log, in that order, with no
//! work done for a request that fails validation.

use crate::error::ApiError;
use crate::log_store::{LogStore, Statistics};
use crate::models::{
    normalize_language_code, normalize_source_language, BulkTranslateRequest,
    BulkTranslateResponse, ClearLogsResponse, HealthResponse, LanguagesResponse, LogsQuery,
    LogsResponse, TranslateRequest, TranslateResponse, AUTO_SOURCE_LANGUAGE,
};
use crate::translator::TranslationService;
use crate::validators::{validate_bulk_texts, validate_language_code, validate_text_length};
use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub const SERVICE_NAME: &str = "translation-service";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared state for all route handlers.
pub struct AppState {
    pub translator: TranslationService,
    pub log_store: LogStore,
    /// Maximum characters per text.
    pub max_text_length: usize,
    /// Maximum number of texts per bulk request.
    pub max_bulk_size: usize,
}

impl AppState {
    pub fn new(
        translator: TranslationService,
        log_store: LogStore,
        max_text_length: usize,
        max_bulk_size: usize,
    ) -> Self {
        Self {
            translator,
            log_store,
            max_text_length,
            max_bulk_size,
        }
    }

    /// Validates, translates and logs one text.
    pub async fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse, ApiError> {
        validate_text_length(&request.text, self.max_text_length)?;

        let target = normalize_language_code(&request.target_language);
        validate_language_code(&target)?;

        let source = normalize_source_language(request.source_language.as_deref());
        if let Some(source) = &source {
            validate_language_code(source)?;
        }

        let text = request.text.trim();
        let translated = self
            .translator
            .resolve(text, &target, source.as_deref())
            .await?;

        let source_label = source.as_deref().unwrap_or(AUTO_SOURCE_LANGUAGE);
        let record = self.log_store.log(
            text,
            &translated,
            source_label,
            &target,
            text.chars().count(),
        );

        info!(
            "Translation completed: {} - {} chars",
            target, record.character_count
        );

        Ok(TranslateResponse {
            original_text: text.to_string(),
            translated_text: translated,
            source_language: source_label.to_string(),
            target_language: target,
            timestamp: record.timestamp,
            character_count: record.character_count,
        })
    }

    /// Validates every text up front, then translates and logs them one by one.
    pub async fn translate_bulk(
        &self,
        request: BulkTranslateRequest,
    ) -> Result<BulkTranslateResponse, ApiError> {
        let texts: Vec<&str> = validate_bulk_texts(&request.texts, self.max_bulk_size)?
            .into_iter()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect();

        let target = normalize_language_code(&request.target_language);
        validate_language_code(&target)?;

        let source = normalize_source_language(request.source_language.as_deref());
        if let Some(source) = &source {
            validate_language_code(source)?;
        }

        for text in &texts {
            validate_text_length(text, self.max_text_length)?;
        }

        let source_label = source.as_deref().unwrap_or(AUTO_SOURCE_LANGUAGE);
        let mut translations = Vec::with_capacity(texts.len());
        for text in texts {
            let translated = self
                .translator
                .resolve(text, &target, source.as_deref())
                .await?;
            self.log_store.log(
                text,
                &translated,
                source_label,
                &target,
                text.chars().count(),
            );
            translations.push(translated);
        }

        info!("Bulk translation completed: {} texts", translations.len());

        Ok(BulkTranslateResponse {
            count: translations.len(),
            translations,
            target_language: target,
            source_language: source_label.to_string(),
            timestamp: Utc::now(),
        })
    }
}

/// Builds the router with permissive CORS.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/v1/translate", post(translate))
        .route("/api/v1/translate/bulk", post(translate_bulk))
        .route("/api/v1/logs", get(list_logs).delete(clear_logs))
        .route("/api/v1/logs/stats", get(statistics))
        .route("/api/v1/languages", get(supported_languages))
        .layer(cors)
        .with_state(state)
}

/// Service info and endpoint list.
async fn root() -> Json<Value> {
    Json(json!({
        "service": "Translation Microservice",
        "version": SERVICE_VERSION,
        "endpoints": {
            "health": "/health",
            "translate": "/api/v1/translate",
            "bulk_translate": "/api/v1/translate/bulk",
            "logs": "/api/v1/logs",
            "statistics": "/api/v1/logs/stats",
            "supported_languages": "/api/v1/languages",
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}

/// POST /api/v1/translate
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    state.translate(request).await.map(Json)
}

/// POST /api/v1/translate/bulk
async fn translate_bulk(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BulkTranslateRequest>,
) -> Result<Json<BulkTranslateResponse>, ApiError> {
    state.translate_bulk(request).await.map(Json)
}

/// GET /api/v1/logs
async fn list_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogsQuery>,
) -> Json<LogsResponse> {
    let logs = state.log_store.get_logs(query.limit(), query.offset());
    Json(LogsResponse {
        count: logs.len(),
        logs,
    })
}

/// DELETE /api/v1/logs
async fn clear_logs(State(state): State<Arc<AppState>>) -> Json<ClearLogsResponse> {
    state.log_store.clear_logs();
    Json(ClearLogsResponse { cleared: true })
}

/// GET /api/v1/logs/stats
async fn statistics(State(state): State<Arc<AppState>>) -> Json<Statistics> {
    Json(state.log_store.get_statistics())
}

/// GET /api/v1/languages
async fn supported_languages(State(state): State<Arc<AppState>>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: state.translator.get_supported_languages().await,
    })
}
