//! Main anonymization engine
//!
//! This module provides [`PiiAnonymizer`], the facade that resolves the
//! request language, runs the analyzer, and formats the detected spans into
//! one of the three output modes.
//!
//! # Architecture
//!
//! The engine coordinates four components, all built once in
//! [`PiiAnonymizer::new`] and read-only afterwards:
//! - **Analyzer**: registry-backed composite scan over the tokenized text
//! - **Anonymizer**: conflict resolution and span replacement
//! - **Operators**: tag redaction, or fake values in substitution mode
//! - **Language detector**: used when the caller passes `"unknown"`
//!
//! # Examples
//!
//! ```no_run
//! use redakt::anonymization::{config::AnonymizationConfig, PiiAnonymizer};
//!
//! # fn example() -> redakt::domain::Result<()> {
//! let anonymizer = PiiAnonymizer::new(AnonymizationConfig::default())?;
//! let result = anonymizer.anonymize_text(
//!     "Hello this is Jamie Clark calling",
//!     "tagged_text",
//!     None,
//!     "en",
//! )?;
//! assert_eq!(result.text(), Some("Hello this is <PERSON> calling"));
//! # Ok(())
//! # }
//! ```

use crate::anonymization::{
    anonymizer::{AnonymizerEngine, OperatorSet},
    config::{AnonymizationConfig, SUPPORTED_LANGUAGES},
    detector::{AnalyzerEngine, PatternLibrary, RecognizerRegistry},
    models::{AnonymizeResult, EntityRecord, OutputMode, RecognizerResult},
    nlp::{LanguageDetector, Tokenizer},
};
use crate::domain::{RedaktError, Result};
use std::sync::Arc;
use std::time::Instant;

/// Language value that asks the engine to detect the language itself
pub const AUTO_DETECT_LANGUAGE: &str = "unknown";

/// PII detection and redaction facade
///
/// # Thread Safety
///
/// Nothing is mutated after construction, so a single instance can be shared
/// across request handlers with `Arc`.
pub struct PiiAnonymizer {
    analyzer: AnalyzerEngine,
    anonymizer: AnonymizerEngine,
    substitution: OperatorSet,
    tagging: OperatorSet,
    language_detector: LanguageDetector,
    default_language: String,
}

impl PiiAnonymizer {
    /// Create a new engine
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The pattern library cannot be loaded
    /// - A configured phone region is unknown to the library
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        config.validate().map_err(|e| {
            RedaktError::Configuration(format!("Invalid anonymization configuration: {e}"))
        })?;

        let library = match config.pattern_library {
            Some(ref path) => PatternLibrary::from_file(path)?,
            None => PatternLibrary::default_library()?,
        };

        let registry = RecognizerRegistry::with_defaults(
            SUPPORTED_LANGUAGES,
            &library,
            &config.default_phone_regions,
        )?;

        let analyzer = AnalyzerEngine::new(Arc::new(registry), Arc::new(Tokenizer::new()?))
            .with_score_threshold(config.score_threshold);

        tracing::info!(
            languages = ?SUPPORTED_LANGUAGES,
            recognizers = analyzer.registry().len(),
            custom_library = config.pattern_library.is_some(),
            "PII anonymizer initialized"
        );

        Ok(Self {
            analyzer,
            anonymizer: AnonymizerEngine::new(),
            substitution: OperatorSet::substitution(),
            tagging: OperatorSet::empty(),
            language_detector: LanguageDetector::new(),
            default_language: config.default_language,
        })
    }

    /// Languages accepted by [`anonymize`](Self::anonymize)
    pub fn supported_languages(&self) -> Vec<String> {
        SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect()
    }

    /// Language used when a request leaves it out
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Classify the language of `text`
    pub fn detect_language(&self, text: &str) -> String {
        self.language_detector.detect_language(text)
    }

    /// Anonymize `text` with a mode given as a string
    ///
    /// The language is resolved first, so an unsupported language fails with
    /// [`RedaktError::UnsupportedLanguage`] even when the mode is also unknown.
    pub fn anonymize_text(
        &self,
        text: &str,
        mode: &str,
        entities: Option<&[String]>,
        lang: &str,
    ) -> Result<AnonymizeResult> {
        let language = self.resolve_language(text, lang)?;
        let mode: OutputMode = mode.parse()?;
        self.run(text, mode, entities, &language)
    }

    /// Anonymize `text` into the representation selected by `mode`
    ///
    /// `lang` is `"en"`, `"no"` or `"unknown"` (detect). An empty `entities`
    /// filter means every entity, same as `None`. Detailed records come out
    /// sorted by `(start, end)`.
    pub fn anonymize(
        &self,
        text: &str,
        mode: OutputMode,
        entities: Option<&[String]>,
        lang: &str,
    ) -> Result<AnonymizeResult> {
        let language = self.resolve_language(text, lang)?;
        self.run(text, mode, entities, &language)
    }

    fn run(
        &self,
        text: &str,
        mode: OutputMode,
        entities: Option<&[String]>,
        language: &str,
    ) -> Result<AnonymizeResult> {
        let started = Instant::now();
        let span = tracing::debug_span!("anonymize", language = %language, mode = %mode);
        let _enter = span.enter();

        let results = self.analyzer.analyze(text, language, entities)?;

        let output = match mode {
            OutputMode::TaggedText => AnonymizeResult::TaggedText(self.anonymizer.anonymize(
                text,
                &results,
                &self.tagging,
            )),
            OutputMode::DetailedInfo => AnonymizeResult::DetailedInfo(to_records(text, &results)),
            OutputMode::ReplacedText => AnonymizeResult::ReplacedText(self.anonymizer.anonymize(
                text,
                &results,
                &self.substitution,
            )),
        };

        tracing::debug!(
            matches = results.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Anonymization complete"
        );

        Ok(output)
    }

    fn resolve_language(&self, text: &str, lang: &str) -> Result<String> {
        let language = if lang == AUTO_DETECT_LANGUAGE {
            self.language_detector.detect_language(text)
        } else {
            lang.to_string()
        };

        if SUPPORTED_LANGUAGES.contains(&language.as_str()) {
            Ok(language)
        } else {
            Err(RedaktError::UnsupportedLanguage(language))
        }
    }
}

fn to_records(text: &str, results: &[RecognizerResult]) -> Vec<EntityRecord> {
    results
        .iter()
        .filter_map(|r| EntityRecord::from_result(text, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PiiAnonymizer {
        PiiAnonymizer::new(AnonymizationConfig::default()).unwrap()
    }

    #[test]
    fn test_supported_languages() {
        assert_eq!(engine().supported_languages(), vec!["en", "no"]);
        assert_eq!(engine().default_language(), "en");
    }

    #[test]
    fn test_unknown_language_is_detected() {
        let text = "Dette er mitt nummer 01019012345 og jeg har ikke mer";
        let detected = engine()
            .anonymize_text(text, "tagged_text", None, "unknown")
            .unwrap();
        assert_eq!(
            detected.text(),
            Some("Dette er mitt nummer <NORWEGIAN_ID> og jeg har ikke mer")
        );

        let english = engine()
            .anonymize_text(text, "tagged_text", None, "en")
            .unwrap();
        assert_eq!(
            english.text(),
            Some("Dette er mitt nummer <PHONE_NUMBER> og jeg har ikke mer")
        );
    }

    #[test]
    fn test_detected_unsupported_language_carries_code() {
        let err = engine()
            .anonymize_text("Esto es un texto de prueba", "tagged_text", None, "unknown")
            .unwrap_err();
        assert!(matches!(err, RedaktError::UnsupportedLanguage(ref l) if l == "es"));
    }

    #[test]
    fn test_language_checked_before_mode() {
        let err = engine()
            .anonymize_text("text", "bogus", None, "es")
            .unwrap_err();
        assert!(matches!(err, RedaktError::UnsupportedLanguage(ref l) if l == "es"));
    }

    #[test]
    fn test_empty_entity_filter_redacts_everything() {
        let text = "Hello this is Jamie Clark calling, my phone number is 212-555-5555";
        let result = engine()
            .anonymize_text(text, "tagged_text", Some(&[][..]), "en")
            .unwrap();
        assert_eq!(
            result.text(),
            Some("Hello this is <PERSON> calling, my phone number is <PHONE_NUMBER>")
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnonymizationConfig {
            default_phone_regions: vec!["XX".to_string()],
            ..Default::default()
        };
        assert!(PiiAnonymizer::new(config).is_err());
    }
}
