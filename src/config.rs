//! Configuration module for the translation service.
//!
//! Handles loading configuration from environment variables and .env files.

use crate::provider::DEFAULT_PROVIDER_URL;
use crate::translator::TranslationBackend;
use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// Maximum characters per text to translate.
    pub max_text_length: usize,

    /// Maximum number of texts in one bulk request.
    pub max_bulk_size: usize,

    /// Which translation backend to use (mock or google).
    pub translation_backend: TranslationBackend,

    /// API key for the Google Translate provider.
    pub google_api_key: Option<String>,

    /// Base URL of the Google Translate v2 API.
    pub provider_api_url: String,

    /// Whether to persist the translation log to SQLite.
    /// When false the log lives in memory only.
    pub use_database: bool,

    /// Path of the SQLite log database.
    pub database_path: PathBuf,

    /// Default log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HOST`: Bind address (default: 0.0.0.0)
    /// - `PORT`: Port (default: 8000)
    /// - `MAX_TEXT_LENGTH`: Maximum characters per text (default: 1000)
    /// - `MAX_BULK_SIZE`: Maximum texts per bulk request (default: 50)
    /// - `TRANSLATION_BACKEND`: "mock" (default) or "google"
    /// - `USE_GOOGLE_API`: "true" selects google when `TRANSLATION_BACKEND` is unset
    /// - `GOOGLE_API_KEY`: Google Translate API key
    /// - `TRANSLATION_API_URL`: Google Translate v2 base URL
    /// - `USE_DATABASE`: Persist logs to SQLite (default: true)
    /// - `DATABASE_PATH`: SQLite file (default: translation_logs.db)
    /// - `LOG_LEVEL`: Default log level (default: info)
    pub fn load() -> Result<Self> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host: IpAddr = parse_or(var("HOST"), IpAddr::V4(Ipv4Addr::UNSPECIFIED))
            .context("HOST must be a valid IP address")?;

        let port: u16 = parse_or(var("PORT"), 8000).context("PORT must be a valid number")?;

        let max_text_length: usize = parse_or(var("MAX_TEXT_LENGTH"), 1000)
            .context("MAX_TEXT_LENGTH must be a valid positive number")?;

        let max_bulk_size: usize = parse_or(var("MAX_BULK_SIZE"), 50)
            .context("MAX_BULK_SIZE must be a valid positive number")?;

        let use_google_api = parse_bool(var("USE_GOOGLE_API"), false)
            .context("USE_GOOGLE_API must be true or false")?;

        // An explicit backend wins over the legacy boolean switch
        let translation_backend: TranslationBackend = match var("TRANSLATION_BACKEND") {
            Some(s) => s.parse().unwrap_or_default(),
            None if use_google_api => TranslationBackend::Google,
            None => TranslationBackend::Mock,
        };

        let google_api_key = var("GOOGLE_API_KEY");

        let provider_api_url =
            var("TRANSLATION_API_URL").unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string());

        let use_database = parse_bool(var("USE_DATABASE"), true)
            .context("USE_DATABASE must be true or false")?;

        let database_path = var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("translation_logs.db"));

        let log_level = var("LOG_LEVEL")
            .map(|level| level.trim().to_lowercase())
            .unwrap_or_else(|| "info".to_string());

        Ok(Config {
            host,
            port,
            max_text_length,
            max_bulk_size,
            translation_backend,
            google_api_key,
            provider_api_url,
            use_database,
            database_path,
            log_level,
        })
    }
}

fn parse_or<T>(value: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => Ok(raw.trim().parse()?),
        None => Ok(default),
    }
}

fn parse_bool(value: Option<String>, default: bool) -> Result<bool> {
    match value.as_deref().map(|v| v.trim().to_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => anyhow::bail!("invalid boolean: {}", other),
        },
    }
}
