//! Person name recognizer
//!
//! A title-case token found in the first-name gazetteer starts a name. The
//! name extends over up to two directly following title-case tokens that are
//! separated by a single space ("Andreas Hansen", "Kari Nordmann Berg").

use super::EntityRecognizer;
use crate::anonymization::models::{entities, NlpArtifacts, RecognizerResult, Token};
use std::collections::HashSet;
use std::sync::Arc;

/// Confidence for gazetteer matches
pub const PERSON_SCORE: f32 = 0.85;

const MAX_SURNAME_TOKENS: usize = 2;

/// Gazetteer-based `PERSON` recognizer
#[derive(Debug, Clone)]
pub struct PersonRecognizer {
    entities: Vec<String>,
    language: String,
    first_names: Arc<HashSet<String>>,
    score: f32,
}

impl PersonRecognizer {
    /// Create a recognizer for `language` backed by a first-name set
    pub fn new(language: impl Into<String>, first_names: Arc<HashSet<String>>) -> Self {
        Self {
            entities: vec![entities::PERSON.to_string()],
            language: language.into(),
            first_names,
            score: PERSON_SCORE,
        }
    }

    fn starts_name(&self, token: &Token) -> bool {
        token.is_title_case() && self.first_names.contains(&token.text)
    }
}

impl EntityRecognizer for PersonRecognizer {
    fn name(&self) -> &str {
        "PersonRecognizer"
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
        artifacts: &NlpArtifacts,
    ) -> Vec<RecognizerResult> {
        let tokens = &artifacts.tokens;
        let mut results = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if !self.starts_name(&tokens[i]) {
                i += 1;
                continue;
            }

            let start = tokens[i].start;
            let mut end = tokens[i].end();
            let mut next = i + 1;
            while next < tokens.len() && next - i <= MAX_SURNAME_TOKENS {
                let candidate = &tokens[next];
                let single_space = text.get(end..candidate.start) == Some(" ");
                if !single_space || !candidate.is_title_case() {
                    break;
                }
                end = candidate.end();
                next += 1;
            }

            results.push(RecognizerResult::new(entities::PERSON, start, end, self.score));
            i = next;
        }

        results
    }
}
