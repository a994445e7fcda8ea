//! Static phrase table and the deterministic mock translator built on it.
//!
//! Resolution has three tiers, tried in order:
//!
//! 1. whole-phrase hit on the lowercased, trimmed text
//! 2. word-by-word substitution when at least one token is known
//! 3. the passthrough marker `[MOCK-<TARGET>] <text>`
//!
//! A language pair with no table at all goes straight to tier 3.

use crate::error::TranslationError;
use crate::translator::{default_languages, LanguageMap, Translator};
use async_trait::async_trait;
use std::collections::HashMap;

/// Punctuation stripped from both ends of a token before word lookup.
const TOKEN_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Source language assumed when the caller does not give one.
const DEFAULT_SOURCE_LANGUAGE: &str = "en";

/// Phrases for one `(source, target)` pair, keyed by lowercase source phrase.
pub type Phrases = HashMap<String, String>;

/// Immutable mapping from `(source, target)` language pair to its phrases.
///
/// Nested by source then target so lookups borrow the codes as `&str`.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    pairs: HashMap<String, HashMap<String, Phrases>>,
}

impl PhraseTable {
    /// An empty table. Every lookup falls through to the passthrough marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the phrases for one language pair.
    ///
    /// Keys are lowercased so lookups stay case-insensitive.
    pub fn with_pair<I, K, V>(mut self, source: &str, target: &str, phrases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let phrases = phrases
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        self.pairs
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string(), phrases);
        self
    }

    /// The phrases for `source` → `target`, if that pair is known.
    pub fn pair(&self, source: &str, target: &str) -> Option<&Phrases> {
        self.pairs.get(source)?.get(target)
    }

    /// Number of language pairs in the table.
    pub fn len(&self) -> usize {
        self.pairs.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The built-in English → {ta, hi, kn, bn, es, fr} greetings table.
    pub fn builtin() -> Self {
        Self::new()
            .with_pair(
                "en",
                "ta",
                [
                    ("hello", "வணக்கம்"),
                    ("good morning", "காலை வணக்கம்"),
                    ("good evening", "மாலை வணக்கம்"),
                    ("thank you", "நன்றி"),
                    ("please", "தயவுசெய்து"),
                    ("yes", "ஆம்"),
                    ("no", "இல்லை"),
                    ("how are you", "நீங்கள் எப்படி இருக்கிறீர்கள்"),
                    ("goodbye", "பிரியாவிடை"),
                    ("welcome", "வரவேற்கிறோம்"),
                ],
            )
            .with_pair(
                "en",
                "hi",
                [
                    ("hello", "नमस्ते"),
                    ("good morning", "सुप्रभात"),
                    ("good evening", "शुभ संध्या"),
                    ("thank you", "धन्यवाद"),
                    ("please", "कृपया"),
                    ("yes", "हाँ"),
                    ("no", "नहीं"),
                    ("how are you", "आप कैसे हैं"),
                    ("goodbye", "अलविदा"),
                    ("welcome", "स्वागत है"),
                ],
            )
            .with_pair(
                "en",
                "kn",
                [
                    ("hello", "ನಮಸ್ಕಾರ"),
                    ("good morning", "ಶುಭೋದಯ"),
                    ("good evening", "ಶುಭ ಸಂಜೆ"),
                    ("thank you", "ಧನ್ಯವಾದ"),
                    ("please", "ದಯವಿಟ್ಟು"),
                    ("yes", "ಹೌದು"),
                    ("no", "ಇಲ್ಲ"),
                    ("how are you", "ನೀವು ಹೇಗಿದ್ದೀರಿ"),
                    ("goodbye", "ವಿದಾಯ"),
                    ("welcome", "ಸ್ವಾಗತ"),
                ],
            )
            .with_pair(
                "en",
                "bn",
                [
                    ("hello", "হ্যালো"),
                    ("good morning", "সুপ্রভাত"),
                    ("good evening", "শুভ সন্ধ্যা"),
                    ("thank you", "ধন্যবাদ"),
                    ("please", "দয়া করে"),
                    ("yes", "হ্যাঁ"),
                    ("no", "না"),
                    ("how are you", "তুমি কেমন আছো"),
                    ("goodbye", "বিদায়"),
                    ("welcome", "স্বাগতম"),
                ],
            )
            .with_pair(
                "en",
                "es",
                [
                    ("hello", "hola"),
                    ("good morning", "buenos días"),
                    ("good evening", "buenas noches"),
                    ("thank you", "gracias"),
                    ("please", "por favor"),
                    ("yes", "sí"),
                    ("no", "no"),
                    ("how are you", "cómo estás"),
                    ("goodbye", "adiós"),
                    ("welcome", "bienvenido"),
                ],
            )
            .with_pair(
                "en",
                "fr",
                [
                    ("hello", "bonjour"),
                    ("good morning", "bonjour"),
                    ("good evening", "bonsoir"),
                    ("thank you", "merci"),
                    ("please", "s'il vous plaît"),
                    ("yes", "oui"),
                    ("no", "non"),
                    ("how are you", "comment allez-vous"),
                    ("goodbye", "au revoir"),
                    ("welcome", "bienvenue"),
                ],
            )
    }
}

/// Deterministic dictionary translator.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    phrases: PhraseTable,
}

impl MockTranslator {
    pub fn new(phrases: PhraseTable) -> Self {
        Self { phrases }
    }

    /// Resolves `text` against the phrase table. Never fails.
    pub fn lookup(&self, text: &str, target_language: &str, source_language: Option<&str>) -> String {
        let source = source_language.unwrap_or(DEFAULT_SOURCE_LANGUAGE);

        let Some(phrases) = self.phrases.pair(source, target_language) else {
            return passthrough(text, target_language);
        };

        if let Some(phrase) = phrases.get(&text.trim().to_lowercase()) {
            return phrase.clone();
        }

        // Unmatched tokens are emitted exactly as written, case included.
        let mut matched = false;
        let words: Vec<&str> = text
            .split_whitespace()
            .map(|token| {
                let key = token.trim_matches(TOKEN_PUNCTUATION).to_lowercase();
                match phrases.get(&key) {
                    Some(word) => {
                        matched = true;
                        word.as_str()
                    }
                    None => token,
                }
            })
            .collect();

        if matched {
            words.join(" ")
        } else {
            passthrough(text, target_language)
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<String, TranslationError> {
        Ok(self.lookup(text, target_language, source_language))
    }

    async fn list_supported_languages(&self) -> Result<LanguageMap, TranslationError> {
        Ok(default_languages())
    }
}

/// The `[MOCK-<TARGET>] <text>` marker for untranslatable input.
fn passthrough(text: &str, target_language: &str) -> String {
    format!("[MOCK-{}] {}", target_language.to_uppercase(), text)
}
