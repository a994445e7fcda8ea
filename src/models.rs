//! HTTP request and response bodies.
//!
//! Request shaping lives here too: language codes arrive in whatever case and
//! padding the client used and are normalized before anything else sees them.

use crate::log_store::TranslationRecord;
use crate::translator::LanguageMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source language recorded when the caller does not name one.
pub const AUTO_SOURCE_LANGUAGE: &str = "auto";

/// Default and maximum page size for `GET /api/v1/logs`.
pub const DEFAULT_LOG_LIMIT: usize = 50;
pub const MAX_LOG_LIMIT: usize = 500;

/// Body of `POST /api/v1/translate`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
    #[serde(default)]
    pub source_language: Option<String>,
}

/// Body of `POST /api/v1/translate/bulk`.
///
/// `texts` is kept as raw JSON so a non-string element can be reported by
/// index instead of failing the whole body.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkTranslateRequest {
    pub texts: Vec<Value>,
    pub target_language: String,
    #[serde(default)]
    pub source_language: Option<String>,
}

/// Response of a single translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub timestamp: DateTime<Utc>,
    pub character_count: u64,
}

/// Response of a bulk translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkTranslateResponse {
    pub translations: Vec<String>,
    pub target_language: String,
    pub source_language: String,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Query string of `GET /api/v1/logs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl LogsQuery {
    /// Requested page size, defaulting to 50 and capped at 500.
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LOG_LIMIT).min(MAX_LOG_LIMIT)
    }

    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogsResponse {
    pub count: usize,
    pub logs: Vec<TranslationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: LanguageMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearLogsResponse {
    pub cleared: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: String,
}

/// Trims and lowercases a language code.
pub fn normalize_language_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Normalizes an optional source language, treating blank as absent.
pub fn normalize_source_language(code: Option<&str>) -> Option<String> {
    code.map(normalize_language_code)
        .filter(|code| !code.is_empty())
}
