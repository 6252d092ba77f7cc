//! Norwegian national ID number (fødselsnummer) recognizer
//!
//! An ID is an 11-digit token whose first six digits form `ddmmyy`. Only the
//! calendar structure is checked: the two-digit year is taken as-is (no
//! century inference) and the control digits are not verified.

use super::EntityRecognizer;
use crate::anonymization::models::{entities, NlpArtifacts, RecognizerResult};
use chrono::NaiveDate;

/// Fixed confidence for a structurally valid ID
pub const NORWEGIAN_ID_SCORE: f32 = 0.95;

/// Language the recognizer is bound to
pub const NORWEGIAN_LANGUAGE: &str = "no";

const ID_LENGTH: usize = 11;

/// Check whether a token is a plausible Norwegian ID
///
/// Returns `false` (never panics) for wrong length, non-numeric date
/// positions or impossible dates such as day 32 or month 00. Year `00` is
/// rejected as well since the year is used without a century.
pub fn is_valid_id(token: &str) -> bool {
    if token.chars().count() != ID_LENGTH {
        return false;
    }

    let (Some(day), Some(month), Some(year)) = (
        parse_pair(token, 0),
        parse_pair(token, 2),
        parse_pair(token, 4),
    ) else {
        return false;
    };

    year >= 1 && NaiveDate::from_ymd_opt(year as i32, month, day).is_some()
}

fn parse_pair(token: &str, offset: usize) -> Option<u32> {
    let pair = token.get(offset..offset + 2)?;
    if !pair.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    pair.parse().ok()
}

/// Token-scanning recognizer for `NORWEGIAN_ID`
#[derive(Debug, Clone)]
pub struct NorwegianIdRecognizer {
    entities: Vec<String>,
    language: String,
    score: f32,
}

impl NorwegianIdRecognizer {
    /// Create the recognizer bound to Norwegian
    pub fn new() -> Self {
        Self {
            entities: vec![entities::NORWEGIAN_ID.to_string()],
            language: NORWEGIAN_LANGUAGE.to_string(),
            score: NORWEGIAN_ID_SCORE,
        }
    }
}

impl Default for NorwegianIdRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for NorwegianIdRecognizer {
    fn name(&self) -> &str {
        "NorwegianIdRecognizer"
    }

    fn supported_entities(&self) -> &[String] {
        &self.entities
    }

    fn supported_language(&self) -> &str {
        &self.language
    }

    fn analyze(
        &self,
        _text: &str,
        _entities: &[String],
        artifacts: &NlpArtifacts,
    ) -> Vec<RecognizerResult> {
        artifacts
            .tokens
            .iter()
            .filter(|token| token.is_digit && is_valid_id(&token.text))
            .map(|token| {
                RecognizerResult::new(
                    entities::NORWEGIAN_ID,
                    token.start,
                    token.start + token.text.len(),
                    self.score,
                )
            })
            .collect()
    }
}
