//! PII detection module
//!
//! Provides the recognizer interface, the recognizer variants and the
//! registry/analyzer that assemble them per language.
//!
//! Recognizers form a closed set ([`Recognizer`]) and all implement
//! [`EntityRecognizer`]; the registry selects them by language and entity,
//! never by concrete type.

pub mod analyzer;
pub mod norwegian_id;
pub mod pattern;
pub mod patterns;
pub mod person;
pub mod phone;
pub mod registry;

pub use analyzer::AnalyzerEngine;
pub use norwegian_id::{is_valid_id, NorwegianIdRecognizer};
pub use pattern::PatternRecognizer;
pub use patterns::PatternLibrary;
pub use person::PersonRecognizer;
pub use phone::PhoneRecognizer;
pub use registry::RecognizerRegistry;

use crate::anonymization::models::{NlpArtifacts, RecognizerResult};

/// Common recognizer capability
pub trait EntityRecognizer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Entity types this recognizer can emit
    fn supported_entities(&self) -> &[String];

    /// The single language this recognizer is bound to
    fn supported_language(&self) -> &str;

    /// Scan text (and its tokens) for the requested entities
    ///
    /// Never fails: malformed candidates are simply not reported.
    fn analyze(
        &self,
        text: &str,
        entities: &[String],
        artifacts: &NlpArtifacts,
    ) -> Vec<RecognizerResult>;
}

/// All recognizer variants known to the registry
#[derive(Debug, Clone)]
pub enum Recognizer {
    /// Regex recognizer from the pattern library
    Pattern(PatternRecognizer),
    /// Gazetteer-based person name recognizer
    Person(PersonRecognizer),
    /// Region-aware phone number recognizer
    Phone(PhoneRecognizer),
    /// Norwegian national ID recognizer
    NorwegianId(NorwegianIdRecognizer),
}

impl Recognizer {
    fn inner(&self) -> &dyn EntityRecognizer {
        match self {
            Self::Pattern(r) => r,
            Self::Person(r) => r,
            Self::Phone(r) => r,
            Self::NorwegianId(r) => r,
        }
    }

    /// Whether this recognizer should run for a language and entity filter
    pub fn supports(&self, language: &str, entities: Option<&[String]>) -> bool {
        if self.supported_language() != language {
            return false;
        }
        match entities {
            None => true,
            Some(requested) => self
                .supported_entities()
                .iter()
                .any(|e| requested.contains(e)),
        }
    }
}

impl EntityRecognizer for Recognizer {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn supported_entities(&self) -> &[String] {
        self.inner().supported_entities()
    }

    fn supported_language(&self) -> &str {
        self.inner().supported_language()
    }

    fn analyze(
        &self,
        text: &str,
        entities: &[String],
        artifacts: &NlpArtifacts,
    ) -> Vec<RecognizerResult> {
        self.inner().analyze(text, entities, artifacts)
    }
}

impl From<PatternRecognizer> for Recognizer {
    fn from(r: PatternRecognizer) -> Self {
        Self::Pattern(r)
    }
}

impl From<PersonRecognizer> for Recognizer {
    fn from(r: PersonRecognizer) -> Self {
        Self::Person(r)
    }
}

impl From<PhoneRecognizer> for Recognizer {
    fn from(r: PhoneRecognizer) -> Self {
        Self::Phone(r)
    }
}

impl From<NorwegianIdRecognizer> for Recognizer {
    fn from(r: NorwegianIdRecognizer) -> Self {
        Self::NorwegianId(r)
    }
}
