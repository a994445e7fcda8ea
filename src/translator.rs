//! Translation resolution: a mock phrase-table lookup or an external provider.
//!
//! The strategy is picked once when [`TranslationService`] is built. If the
//! provider cannot be constructed the service falls back to mock mode for the
//! rest of its life and never tries the provider again.

use crate::error::TranslationError;
use crate::phrasebook::{MockTranslator, PhraseTable};
use crate::provider::ProviderTranslator;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Mapping of language code to display name.
pub type LanguageMap = BTreeMap<String, String>;

/// Something that can turn text into another language.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target_language`.
    ///
    /// `source_language` is `None` when the caller wants the source detected
    /// (or, for the mock, assumed to be English).
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<String, TranslationError>;

    /// Lists the languages this translator can handle.
    async fn list_supported_languages(&self) -> Result<LanguageMap, TranslationError>;
}

/// Which translation strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationBackend {
    /// Deterministic phrase-table lookup.
    #[default]
    Mock,
    /// Google Translate v2 REST API.
    Google,
}

impl FromStr for TranslationBackend {
    type Err = std::convert::Infallible;

    /// Parses the backend from a string.
    ///
    /// Accepts "google" or "provider" for Google, defaults to Mock.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "google" | "provider" => TranslationBackend::Google,
            _ => TranslationBackend::Mock,
        })
    }
}

impl fmt::Display for TranslationBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationBackend::Mock => f.write_str("mock"),
            TranslationBackend::Google => f.write_str("google"),
        }
    }
}

/// Languages advertised in mock mode, and whenever the provider listing fails.
pub fn default_languages() -> LanguageMap {
    [
        ("en", "English"),
        ("ta", "Tamil"),
        ("hi", "Hindi"),
        ("kn", "Kannada"),
        ("bn", "Bengali"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
        ("ru", "Russian"),
        ("ja", "Japanese"),
        ("zh", "Chinese"),
        ("ar", "Arabic"),
        ("ko", "Korean"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), name.to_string()))
    .collect()
}

/// Resolves translations with the strategy chosen at construction.
pub struct TranslationService {
    translator: Box<dyn Translator>,
    backend: TranslationBackend,
}

impl TranslationService {
    /// Builds the service for `backend`.
    ///
    /// For [`TranslationBackend::Google`] a provider client is created from
    /// `api_key` and `api_url`; if that fails the service downgrades to mock
    /// mode permanently and logs why.
    pub fn new(
        backend: TranslationBackend,
        api_key: Option<&str>,
        api_url: &str,
        phrases: PhraseTable,
    ) -> Self {
        let service = match backend {
            TranslationBackend::Mock => Self::mock(phrases),
            TranslationBackend::Google => match ProviderTranslator::new(api_key, api_url) {
                Ok(provider) => Self::with_translator(Box::new(provider), TranslationBackend::Google),
                Err(e) => {
                    warn!(
                        "Failed to initialize translation provider ({}), falling back to mock translations",
                        e
                    );
                    Self::mock(phrases)
                }
            },
        };

        info!("TranslationService initialized (backend: {})", service.backend);
        service
    }

    /// Builds a mock-mode service over `phrases`.
    pub fn mock(phrases: PhraseTable) -> Self {
        Self::with_translator(Box::new(MockTranslator::new(phrases)), TranslationBackend::Mock)
    }

    /// Wraps an arbitrary translator.
    pub fn with_translator(translator: Box<dyn Translator>, backend: TranslationBackend) -> Self {
        Self {
            translator,
            backend,
        }
    }

    /// The backend actually in use, after any construction-time fallback.
    pub fn backend(&self) -> TranslationBackend {
        self.backend
    }

    /// Translates `text`. Provider failures are returned as-is, never retried.
    pub async fn resolve(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<String, TranslationError> {
        let translated = self
            .translator
            .translate(text, target_language, source_language)
            .await?;

        debug!(
            "Translated '{}' ({} -> {}) -> '{}'",
            text,
            source_language.unwrap_or("auto"),
            target_language,
            translated
        );

        Ok(translated)
    }

    /// Languages the active translator supports, or [`default_languages`] if
    /// the listing fails.
    pub async fn get_supported_languages(&self) -> LanguageMap {
        match self.translator.list_supported_languages().await {
            Ok(languages) => languages,
            Err(e) => {
                warn!("Failed to get supported languages: {}", e);
                default_languages()
            }
        }
    }
}
