//! Region-aware phone number recognizer
//!
//! Phone formats come from the pattern library's `[phone_regions]` tables.
//! A recognizer is configured with the region codes it accepts; matches from
//! several regions that cover the same digits are collapsed into the widest
//! span.

use super::patterns::PatternLibrary;
use super::EntityRecognizer;
use crate::anonymization::models::{entities, NlpArtifacts, RecognizerResult};
use crate::domain::{RedaktError, Result};
use regex::Regex;

/// Confidence for phone matches
pub const PHONE_SCORE: f32 = 0.4;

/// Regions used when a deployment does not configure its own
pub const DEFAULT_REGIONS: &[&str] = &["US", "UK", "DE", "IL", "IN", "CA", "BR"];

/// `PHONE_NUMBER` recognizer bound to one language and a set of regions
#[derive(Debug, Clone)]
pub struct PhoneRecognizer {
    entities: Vec<String>,
    language: String,
    regions: Vec<String>,
    regexes: Vec<Regex>,
    score: f32,
}

impl PhoneRecognizer {
    /// Create a recognizer accepting the given region codes
    ///
    /// Fails when a region is unknown to the library or the list is empty.
    pub fn new<S: AsRef<str>>(
        language: impl Into<String>,
        regions: &[S],
        library: &PatternLibrary,
    ) -> Result<Self> {
        if regions.is_empty() {
            return Err(RedaktError::Configuration(
                "Phone recognizer needs at least one region".to_string(),
            ));
        }

        let mut codes = Vec::with_capacity(regions.len());
        let mut regexes = Vec::new();
        for region in regions {
            let code = region.as_ref().to_uppercase();
            if codes.contains(&code) {
                continue;
            }
            let patterns = library.phone_region(&code).ok_or_else(|| {
                RedaktError::Configuration(format!("Unknown phone region: {code}"))
            })?;
            regexes.extend(patterns.iter().cloned());
            codes.push(code);
        }

        Ok(Self {
            entities: vec![entities::PHONE_NUMBER.to_string()],
            language: language.into(),
            regions: codes,
            regexes,
            score: PHONE_SCORE,
        })
    }

    /// Create a recognizer accepting every region the library knows
    pub fn with_all_regions(
        language: impl Into<String>,
        library: &PatternLibrary,
    ) -> Result<Self> {
        Self::new(language, &library.region_codes(), library)
    }

    /// Accepted region codes
    pub fn regions(&self) -> &[String] {
        &self.regions
    }
}

impl EntityRecognizer for PhoneRecognizer {
    fn name(&self) -> &str {
        "PhoneRecognizer"
    }

    fn supported_entities(&self) -> &[String] {
        &self.entities
    }

    fn supported_language(&self) -> &str {
        &self.language
    }

    fn analyze(
        &self,
        text: &str,
        _entities: &[String],
        _artifacts: &NlpArtifacts,
    ) -> Vec<RecognizerResult> {
        let mut spans: Vec<(usize, usize)> = self
            .regexes
            .iter()
            .flat_map(|regex| regex.find_iter(text))
            .filter(|m| m.as_str().chars().filter(|c| c.is_ascii_digit()).count() >= 7)
            .map(|m| (m.start(), m.end()))
            .collect();

        // Widest span first so contained matches can be skipped
        spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut results: Vec<RecognizerResult> = Vec::new();
        for (start, end) in spans {
            let covered = results
                .iter()
                .any(|r| r.start <= start && end <= r.end);
            if !covered {
                results.push(RecognizerResult::new(
                    entities::PHONE_NUMBER,
                    start,
                    end,
                    self.score,
                ));
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> PatternLibrary {
        PatternLibrary::default_library().unwrap()
    }

    fn find(recognizer: &PhoneRecognizer, text: &str) -> Vec<String> {
        recognizer
            .analyze(text, &[], &NlpArtifacts::default())
            .iter()
            .map(|r| text[r.start..r.end].to_string())
            .collect()
    }

    #[test]
    fn test_us_number_with_default_regions() {
        let recognizer = PhoneRecognizer::new("en", DEFAULT_REGIONS, &library()).unwrap();
        assert_eq!(
            find(&recognizer, "my phone number is 212-555-5555"),
            vec!["212-555-5555"]
        );
    }

    #[test]
    fn test_norwegian_number_needs_norwegian_region() {
        let text = "Tlf. 98 45 76 29";
        let default = PhoneRecognizer::new("no", DEFAULT_REGIONS, &library()).unwrap();
        let all = PhoneRecognizer::with_all_regions("no", &library()).unwrap();

        assert!(find(&default, text).is_empty());
        assert_eq!(find(&all, text), vec!["98 45 76 29"]);
    }

    #[test]
    fn test_overlapping_region_matches_collapse() {
        let recognizer = PhoneRecognizer::new("en", &["US", "CA"], &library()).unwrap();
        let results = recognizer.analyze("call (212) 555-5555", &[], &NlpArtifacts::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, PHONE_SCORE);
    }

    #[test]
    fn test_unknown_region_fails() {
        let err = PhoneRecognizer::new("no", &["XX"], &library()).unwrap_err();
        assert!(err.to_string().contains("XX"));
    }

    #[test]
    fn test_empty_regions_fail() {
        let regions: [&str; 0] = [];
        assert!(PhoneRecognizer::new("no", &regions, &library()).is_err());
    }

    #[test]
    fn test_all_regions_are_recorded() {
        let recognizer = PhoneRecognizer::with_all_regions("no", &library()).unwrap();
        assert!(recognizer.regions().contains(&"NO".to_string()));
        assert_eq!(recognizer.supported_language(), "no");
    }
}
