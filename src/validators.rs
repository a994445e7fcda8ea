//! Input checks that run before any translation work.
//!
//! Validation is kept apart from sanitization: the checks here only accept or
//! reject, they never rewrite the caller's input. [`sanitize_text`] is the one
//! normalizing helper and nothing calls it implicitly.

use crate::error::ValidationError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// ISO 639-1 codes accepted as source or target, plus two Chinese region variants.
pub const SUPPORTED_LANGUAGE_CODES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", //
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", //
    "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", //
    "da", "de", "dv", "dz", //
    "ee", "el", "en", "eo", "es", "et", "eu", //
    "fa", "ff", "fi", "fj", "fo", "fr", "fy", //
    "ga", "gd", "gl", "gn", "gu", "gv", //
    "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz", //
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", //
    "ja", "jv", //
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", //
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", //
    "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", //
    "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", //
    "oc", "oj", "om", "or", "os", //
    "pa", "pi", "pl", "ps", "pt", //
    "qu", //
    "rm", "rn", "ro", "ru", "rw", //
    "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss", "st",
    "su", "sv", "sw", //
    "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", //
    "ug", "uk", "ur", "uz", //
    "ve", "vi", "vo", //
    "wa", "wo", //
    "xh", //
    "yi", "yo", //
    "za", "zh", "zu", //
    "zh-cn", "zh-tw",
];

static LANGUAGE_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[a-z]{2})?$").expect("valid language code regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Checks that `code` is a well-formed, supported language code.
///
/// The code is trimmed and lowercased before matching, so `" EN "` passes.
/// Callers that store or forward the code are expected to normalize it themselves.
pub fn validate_language_code(code: &str) -> Result<(), ValidationError> {
    if code.trim().is_empty() {
        return Err(ValidationError::new("Language code cannot be empty"));
    }

    let normalized = code.trim().to_lowercase();

    if !LANGUAGE_CODE_PATTERN.is_match(&normalized) {
        return Err(ValidationError::new(format!(
            "Invalid language code format: '{}'. Must be 2 lowercase letters (e.g., 'en', 'ta') \
             or 2 lowercase letters followed by hyphen and 2 more letters (e.g., 'zh-cn')",
            normalized
        )));
    }

    if !SUPPORTED_LANGUAGE_CODES.contains(&normalized.as_str()) {
        return Err(ValidationError::new(format!(
            "Unsupported language code: '{}'. Please use a valid ISO 639-1 language code.",
            normalized
        )));
    }

    Ok(())
}

/// Checks that `text` is non-blank and at most `max_length` characters.
///
/// Length is measured on the untrimmed text, in Unicode scalar values.
pub fn validate_text_length(text: &str, max_length: usize) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::new("Text cannot be empty"));
    }

    if text.trim().is_empty() {
        return Err(ValidationError::new("Text cannot be only whitespace"));
    }

    let length = text.chars().count();
    if length > max_length {
        return Err(ValidationError::new(format!(
            "Text too long: {} characters. Maximum allowed: {} characters",
            length, max_length
        )));
    }

    Ok(())
}

/// Checks a bulk request's `texts` array as a unit.
///
/// Returns the elements as string slices in their original order, blanks included.
/// Per-element length and the language codes are not checked here.
pub fn validate_bulk_texts(texts: &[Value], max_items: usize) -> Result<Vec<&str>, ValidationError> {
    if texts.is_empty() {
        return Err(ValidationError::new("Texts list cannot be empty"));
    }

    if texts.len() > max_items {
        return Err(ValidationError::new(format!(
            "Too many texts: {}. Maximum allowed: {} texts per request",
            texts.len(),
            max_items
        )));
    }

    let strings = texts
        .iter()
        .enumerate()
        .map(|(i, value)| {
            value
                .as_str()
                .ok_or_else(|| ValidationError::new(format!("Item at index {} is not a string", i)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if strings.iter().all(|text| text.trim().is_empty()) {
        return Err(ValidationError::new(
            "At least one non-empty text is required",
        ));
    }

    Ok(strings)
}

/// Removes NUL characters, collapses whitespace runs into single spaces and trims.
pub fn sanitize_text(text: &str) -> String {
    let without_nul = text.replace('\0', "");
    WHITESPACE_RUN
        .replace_all(&without_nul, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_language_code_accepts_supported() {
        for code in ["en", "ta", "hi", "zh", "zh-cn", "zh-tw"] {
            assert!(validate_language_code(code).is_ok(), "{code} should pass");
        }
    }

    #[test]
    fn test_language_code_normalizes_before_matching() {
        assert!(validate_language_code(" EN ").is_ok());
        assert!(validate_language_code("Zh-CN").is_ok());
    }

    #[test]
    fn test_language_code_rejects_blank() {
        let err = validate_language_code("").unwrap_err();
        assert_eq!(err.reason(), "Language code cannot be empty");
        assert!(validate_language_code("   ").is_err());
    }

    #[test]
    fn test_language_code_rejects_bad_format() {
        for code in ["e", "eng", "xyz", "en-", "en-usa", "e1", "en_us"] {
            let err = validate_language_code(code).unwrap_err();
            assert!(
                err.reason().starts_with("Invalid language code format"),
                "{code}: {}",
                err.reason()
            );
        }
    }

    #[test]
    fn test_language_code_rejects_unsupported() {
        for code in ["xx", "qq", "en-us", "zh-hk"] {
            let err = validate_language_code(code).unwrap_err();
            assert!(err.reason().starts_with("Unsupported language code"), "{code}");
        }
    }

    #[test]
    fn test_text_length_bounds() {
        assert!(validate_text_length("hello", 1000).is_ok());
        assert!(validate_text_length(&"a".repeat(1000), 1000).is_ok());
        assert!(validate_text_length(&"a".repeat(1001), 1000).is_err());
    }

    #[test]
    fn test_text_length_counts_characters_not_bytes() {
        // 6 code points, 18 bytes
        assert!(validate_text_length("வணக்கம", 6).is_ok());
    }

    #[test]
    fn test_text_length_rejects_empty_and_whitespace() {
        assert_eq!(
            validate_text_length("", 10).unwrap_err().reason(),
            "Text cannot be empty"
        );
        assert_eq!(
            validate_text_length(" \n\t", 10).unwrap_err().reason(),
            "Text cannot be only whitespace"
        );
    }

    #[test]
    fn test_text_length_checks_untrimmed_length() {
        assert!(validate_text_length("  ab  ", 4).is_err());
    }

    #[test]
    fn test_bulk_texts_valid() {
        let texts = vec![json!("Hello"), json!("  "), json!("Thank you")];
        let strings = validate_bulk_texts(&texts, 50).unwrap();
        assert_eq!(strings, vec!["Hello", "  ", "Thank you"]);
    }

    #[test]
    fn test_bulk_texts_rejects_empty_list() {
        let err = validate_bulk_texts(&[], 50).unwrap_err();
        assert_eq!(err.reason(), "Texts list cannot be empty");
    }

    #[test]
    fn test_bulk_texts_rejects_too_many() {
        let texts = vec![json!("hi"); 51];
        let err = validate_bulk_texts(&texts, 50).unwrap_err();
        assert!(err.reason().starts_with("Too many texts: 51"));
    }

    #[test]
    fn test_bulk_texts_rejects_non_string() {
        let texts = vec![json!("hi"), json!(42)];
        let err = validate_bulk_texts(&texts, 50).unwrap_err();
        assert_eq!(err.reason(), "Item at index 1 is not a string");
    }

    #[test]
    fn test_bulk_texts_rejects_all_blank() {
        let texts = vec![json!(""), json!("   ")];
        let err = validate_bulk_texts(&texts, 50).unwrap_err();
        assert_eq!(err.reason(), "At least one non-empty text is required");
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(sanitize_text("  hello\0   world \n\tagain  "), "hello world again");
        assert_eq!(sanitize_text("\0"), "");
    }
}
