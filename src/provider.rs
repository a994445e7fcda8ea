//! Google Translate v2 delegate.
//!
//! Every failure, whether transport, HTTP status or response shape, comes back as
//! [`TranslationError::Provider`]. Nothing here retries.

use crate::error::TranslationError;
use crate::translator::{LanguageMap, Translator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Google Translate v2 endpoint.
pub const DEFAULT_PROVIDER_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Translator backed by the Google Translate v2 REST API.
#[derive(Clone)]
pub struct ProviderTranslator {
    /// HTTP client for API requests.
    client: reqwest::Client,
    /// API key sent as the `key` query parameter.
    api_key: String,
    /// Base URL of the v2 API, without trailing slash.
    base_url: String,
}

/// Request body for the translate call.
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct LanguagesData {
    languages: Vec<LanguageEntry>,
}

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    language: String,
    #[serde(default)]
    name: Option<String>,
}

impl ProviderTranslator {
    /// Creates a provider client.
    ///
    /// # Errors
    ///
    /// Fails if `api_key` is missing or blank, or if the HTTP client cannot be built.
    pub fn new(api_key: Option<&str>, base_url: &str) -> Result<Self, TranslationError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TranslationError::Provider("API key is not configured".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                TranslationError::Provider(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reads a successful JSON body, turning anything else into an error.
    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TranslationError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Translation provider error: {} - {}", status, body);
            return Err(TranslationError::Provider(format!(
                "Provider returned status: {}",
                status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            TranslationError::Provider(format!("Failed to parse provider response: {}", e))
        })
    }
}

#[async_trait]
impl Translator for ProviderTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<String, TranslationError> {
        let request = TranslateRequest {
            q: text,
            target: target_language,
            source: source_language,
            format: "text",
        };

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TranslationError::Provider(format!("Failed to reach translation provider: {}", e))
            })?;

        let body: Envelope<TranslateData> = Self::read_json(response).await?;
        let translated = body
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| {
                TranslationError::Provider("Provider returned no translations".to_string())
            })?;

        debug!("Provider translation: '{}' -> '{}'", text, translated);
        Ok(translated)
    }

    async fn list_supported_languages(&self) -> Result<LanguageMap, TranslationError> {
        let response = self
            .client
            .get(format!("{}/languages", self.base_url))
            .query(&[("target", "en"), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                TranslationError::Provider(format!("Failed to reach translation provider: {}", e))
            })?;

        let body: Envelope<LanguagesData> = Self::read_json(response).await?;
        Ok(body
            .data
            .languages
            .into_iter()
            .map(|entry| {
                let name = entry.name.unwrap_or_else(|| entry.language.clone());
                (entry.language, name)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_key() {
        assert!(ProviderTranslator::new(None, DEFAULT_PROVIDER_URL).is_err());
        assert!(ProviderTranslator::new(Some(""), DEFAULT_PROVIDER_URL).is_err());
        assert!(ProviderTranslator::new(Some("  "), DEFAULT_PROVIDER_URL).is_err());
    }

    #[test]
    fn test_new_trims_url() {
        let provider = ProviderTranslator::new(Some("key"), "http://example.test/v2/").unwrap();
        assert_eq!(provider.base_url, "http://example.test/v2");
        assert_eq!(provider.api_key, "key");
    }

    #[test]
    fn test_request_body_omits_missing_source() {
        let body = serde_json::to_value(TranslateRequest {
            q: "hello",
            target: "ta",
            source: None,
            format: "text",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"q": "hello", "target": "ta", "format": "text"})
        );
    }

    #[test]
    fn test_parse_translate_response() {
        let raw = r#"{"data":{"translations":[{"translatedText":"hola","detectedSourceLanguage":"en"}]}}"#;
        let body: Envelope<TranslateData> = serde_json::from_str(raw).unwrap();
        assert_eq!(body.data.translations[0].translated_text, "hola");
    }

    #[test]
    fn test_parse_languages_response() {
        let raw = r#"{"data":{"languages":[{"language":"ta","name":"Tamil"},{"language":"xx"}]}}"#;
        let body: Envelope<LanguagesData> = serde_json::from_str(raw).unwrap();
        assert_eq!(body.data.languages.len(), 2);
        assert_eq!(body.data.languages[1].name, None);
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_a_translation_error() {
        // Port 1 on localhost refuses connections.
        let provider = ProviderTranslator::new(Some("key"), "http://127.0.0.1:1").unwrap();
        let err = provider.translate("hello", "ta", None).await.unwrap_err();
        assert!(matches!(err, TranslationError::Provider(_)));
        assert!(provider.list_supported_languages().await.is_err());
    }
}
