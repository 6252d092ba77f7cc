//! Regex-based pattern recognizer
//!
//! One recognizer per pattern-library definition and language. Every regex
//! match becomes a result with the definition's fixed confidence, provided it
//! survives the definition's validation step.

use super::patterns::{CompiledPatternSet, Validation};
use super::EntityRecognizer;
use crate::anonymization::models::{NlpArtifacts, RecognizerResult};
use regex::Regex;
use std::net::IpAddr;

/// Regex recognizer for a single entity type
#[derive(Debug, Clone)]
pub struct PatternRecognizer {
    name: String,
    entities: Vec<String>,
    language: String,
    regexes: Vec<Regex>,
    confidence: f32,
    validation: Validation,
}

impl PatternRecognizer {
    /// Build a recognizer from a compiled library definition
    pub fn from_set(set: &CompiledPatternSet, language: impl Into<String>) -> Self {
        Self {
            name: format!("{}Recognizer", set.name),
            entities: vec![set.entity.clone()],
            language: language.into(),
            regexes: set.regexes.clone(),
            confidence: set.confidence,
            validation: set.validation,
        }
    }

    /// Build an ad-hoc recognizer
    pub fn new(
        entity: impl Into<String>,
        language: impl Into<String>,
        regexes: Vec<Regex>,
        confidence: f32,
    ) -> Self {
        let entity = entity.into();
        Self {
            name: format!("{entity}Recognizer"),
            entities: vec![entity],
            language: language.into(),
            regexes,
            confidence: confidence.clamp(0.0, 1.0),
            validation: Validation::None,
        }
    }

    /// Attach a validation step
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    fn validate(&self, candidate: &str) -> bool {
        match self.validation {
            Validation::None => true,
            Validation::Luhn => luhn_checksum(candidate),
            Validation::Iban => iban_checksum(candidate),
            Validation::Ip => candidate.parse::<IpAddr>().is_ok(),
        }
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn name(&self) -> &str {
        &self.name
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
        let entity = &self.entities[0];
        let mut results = Vec::new();

        for regex in &self.regexes {
            for matched in regex.find_iter(text) {
                if matched.as_str().is_empty() || !self.validate(matched.as_str()) {
                    continue;
                }
                results.push(RecognizerResult::new(
                    entity.as_str(),
                    matched.start(),
                    matched.end(),
                    self.confidence,
                ));
            }
        }

        results
    }
}

/// Luhn check over the digits of `candidate`; separators are ignored
pub fn luhn_checksum(candidate: &str) -> bool {
    let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
    if !(12..=19).contains(&digits.len()) {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// ISO 13616 mod-97 check; spaces are ignored
pub fn iban_checksum(candidate: &str) -> bool {
    let compact: String = candidate.chars().filter(|c| !c.is_whitespace()).collect();
    if !(15..=34).contains(&compact.len()) || !compact.is_ascii() {
        return false;
    }

    let (head, tail) = compact.split_at(4);
    let mut remainder: u32 = 0;
    for c in tail.chars().chain(head.chars()) {
        let value = match c.to_digit(36) {
            Some(v) => v,
            None => return false,
        };
        remainder = if value < 10 {
            (remainder * 10 + value) % 97
        } else {
            (remainder * 100 + value) % 97
        };
    }

    remainder == 1
}
