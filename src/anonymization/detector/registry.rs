//! Recognizer registry
//!
//! Holds every active recognizer for the supported languages. Built once at
//! startup and read-only afterwards.

use super::norwegian_id::NORWEGIAN_LANGUAGE;
use super::{
    EntityRecognizer, NorwegianIdRecognizer, PatternLibrary, PatternRecognizer,
    PersonRecognizer, PhoneRecognizer, Recognizer,
};
use crate::domain::Result;
use std::collections::BTreeSet;

/// Language-indexed collection of recognizers
#[derive(Debug, Clone, Default)]
pub struct RecognizerRegistry {
    recognizers: Vec<Recognizer>,
    languages: Vec<String>,
}

impl RecognizerRegistry {
    /// Create an empty registry for the given languages
    pub fn new<S: AsRef<str>>(languages: &[S]) -> Self {
        Self {
            recognizers: Vec::new(),
            languages: languages.iter().map(|l| l.as_ref().to_string()).collect(),
        }
    }

    /// Build the full registry: built-in recognizers for every language plus
    /// the Norwegian ID and all-region Norwegian phone recognizers
    pub fn with_defaults<S: AsRef<str>, R: AsRef<str>>(
        languages: &[S],
        library: &PatternLibrary,
        default_phone_regions: &[R],
    ) -> Result<Self> {
        let mut registry = Self::new(languages);
        registry.load_predefined_recognizers(library, default_phone_regions)?;

        if registry.supports_language(NORWEGIAN_LANGUAGE) {
            registry.add_recognizer(NorwegianIdRecognizer::new());
            registry.add_recognizer(PhoneRecognizer::with_all_regions(
                NORWEGIAN_LANGUAGE,
                library,
            )?);
        }

        tracing::debug!(
            recognizers = registry.len(),
            languages = ?registry.languages,
            "Recognizer registry built"
        );

        Ok(registry)
    }

    /// Register the built-in recognizers for every supported language
    pub fn load_predefined_recognizers<R: AsRef<str>>(
        &mut self,
        library: &PatternLibrary,
        default_phone_regions: &[R],
    ) -> Result<()> {
        let languages = self.languages.clone();
        for language in &languages {
            for set in library.pattern_sets().iter().filter(|s| s.applies_to(language)) {
                self.add_recognizer(PatternRecognizer::from_set(set, language.as_str()));
            }
            self.add_recognizer(PersonRecognizer::new(
                language.as_str(),
                library.first_names(),
            ));
            self.add_recognizer(PhoneRecognizer::new(
                language.as_str(),
                default_phone_regions,
                library,
            )?);
        }
        Ok(())
    }

    /// Append a recognizer
    pub fn add_recognizer(&mut self, recognizer: impl Into<Recognizer>) {
        self.recognizers.push(recognizer.into());
    }

    /// Recognizers for a language, restricted to an entity filter
    pub fn get_recognizers(&self, language: &str, entities: Option<&[String]>) -> Vec<&Recognizer> {
        self.recognizers
            .iter()
            .filter(|r| r.supports(language, entities))
            .collect()
    }

    /// Entity types any recognizer can emit for a language
    pub fn supported_entities(&self, language: &str) -> BTreeSet<String> {
        self.recognizers
            .iter()
            .filter(|r| r.supported_language() == language)
            .flat_map(|r| r.supported_entities().iter().cloned())
            .collect()
    }

    /// Languages the registry was built for
    pub fn supported_languages(&self) -> &[String] {
        &self.languages
    }

    /// Whether `language` is one of the registry languages
    pub fn supports_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// Total number of recognizers
    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    /// True when no recognizer is registered
    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::detector::phone::DEFAULT_REGIONS;

    fn registry() -> RecognizerRegistry {
        let library = PatternLibrary::default_library().unwrap();
        RecognizerRegistry::with_defaults(&["en", "no"], &library, DEFAULT_REGIONS).unwrap()
    }

    #[test]
    fn test_norwegian_id_only_for_norwegian() {
        let registry = registry();
        assert!(registry.supported_entities("no").contains("NORWEGIAN_ID"));
        assert!(!registry.supported_entities("en").contains("NORWEGIAN_ID"));
    }

    #[test]
    fn test_norwegian_has_two_phone_recognizers() {
        let registry = registry();
        let phone = vec!["PHONE_NUMBER".to_string()];
        assert_eq!(registry.get_recognizers("no", Some(phone.as_slice())).len(), 2);
        assert_eq!(registry.get_recognizers("en", Some(phone.as_slice())).len(), 1);
    }

    #[test]
    fn test_unknown_language_has_no_recognizers() {
        let registry = registry();
        assert!(registry.get_recognizers("es", None).is_empty());
        assert!(registry.supported_entities("es").is_empty());
    }

    #[test]
    fn test_shared_entities() {
        let registry = registry();
        for language in ["en", "no"] {
            let entities = registry.supported_entities(language);
            for entity in ["PERSON", "PHONE_NUMBER", "EMAIL_ADDRESS", "URL"] {
                assert!(entities.contains(entity), "{language} lacks {entity}");
            }
        }
    }

    #[test]
    fn test_without_norwegian() {
        let library = PatternLibrary::default_library().unwrap();
        let registry =
            RecognizerRegistry::with_defaults(&["en"], &library, DEFAULT_REGIONS).unwrap();
        assert!(!registry.supports_language("no"));
        assert!(registry.get_recognizers("no", None).is_empty());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_bad_default_region_fails() {
        let library = PatternLibrary::default_library().unwrap();
        assert!(RecognizerRegistry::with_defaults(&["en"], &library, &["ZZ"]).is_err());
    }
}
