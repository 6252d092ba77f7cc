//! Analyzer engine
//!
//! Runs the registry's recognizers for one language over a text and merges
//! their findings into one list sorted by `(start, end)`.

use super::{EntityRecognizer, RecognizerRegistry};
use crate::anonymization::models::RecognizerResult;
use crate::anonymization::nlp::NlpEngine;
use crate::domain::{RedaktError, Result};
use std::sync::Arc;

/// Composite scan over every recognizer registered for a language
pub struct AnalyzerEngine {
    registry: Arc<RecognizerRegistry>,
    nlp_engine: Arc<dyn NlpEngine>,
    score_threshold: f32,
}

impl AnalyzerEngine {
    /// Create an analyzer over a registry and parser
    pub fn new(registry: Arc<RecognizerRegistry>, nlp_engine: Arc<dyn NlpEngine>) -> Self {
        Self {
            registry,
            nlp_engine,
            score_threshold: 0.0,
        }
    }

    /// Drop results scoring below `threshold`
    pub fn with_score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// The registry backing this analyzer
    pub fn registry(&self) -> &RecognizerRegistry {
        &self.registry
    }

    /// Detect PII in `text` for `language`, optionally restricted to entity types
    ///
    /// An empty `entities` slice selects every entity, same as `None`.
    pub fn analyze(
        &self,
        text: &str,
        language: &str,
        entities: Option<&[String]>,
    ) -> Result<Vec<RecognizerResult>> {
        let entities = entities.filter(|e| !e.is_empty());
        if !self.registry.supports_language(language) {
            return Err(RedaktError::UnsupportedLanguage(language.to_string()));
        }

        let recognizers = self.registry.get_recognizers(language, entities);
        if recognizers.is_empty() {
            return Ok(Vec::new());
        }

        let artifacts = self.nlp_engine.parse(text);
        let requested: Vec<String> = match entities {
            Some(e) => e.to_vec(),
            None => self.registry.supported_entities(language).into_iter().collect(),
        };

        let mut results = Vec::new();
        for recognizer in recognizers {
            let found = recognizer.analyze(text, &requested, &artifacts);
            tracing::trace!(
                recognizer = recognizer.name(),
                matches = found.len(),
                "Recognizer finished"
            );
            results.extend(found.into_iter().filter(|r| {
                requested.contains(&r.entity_type)
                    && r.score >= self.score_threshold
                    && r.is_valid_for(text)
            }));
        }

        Ok(remove_contained_duplicates(results))
    }
}

/// Drop same-entity results contained in another one unless they score higher,
/// then sort by `(start, end)`
fn remove_contained_duplicates(mut results: Vec<RecognizerResult>) -> Vec<RecognizerResult> {
    // Highest score first, widest first, so the kept result is seen before
    // anything it absorbs
    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.len().cmp(&a.len()))
            .then(a.start.cmp(&b.start))
    });

    let mut kept: Vec<RecognizerResult> = Vec::with_capacity(results.len());
    for result in results {
        let absorbed = kept.iter().any(|k| {
            k.entity_type == result.entity_type && k.contains(&result) && k.score >= result.score
        });
        if !absorbed {
            kept.push(result);
        }
    }

    kept.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
    kept
}
