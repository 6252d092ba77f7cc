//! Recognizer result (a located, typed PII match)

use serde::{Deserialize, Serialize};

/// A single detection produced by a recognizer
///
/// Offsets are byte offsets into the analyzed text; `0 <= start < end <= text.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizerResult {
    /// Entity type label, e.g. `PERSON`
    pub entity_type: String,
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Confidence score (0.0 - 1.0)
    pub score: f32,
}

impl RecognizerResult {
    /// Create a new result, clamping the score into `[0, 1]`
    pub fn new(entity_type: impl Into<String>, start: usize, end: usize, score: f32) -> Self {
        Self {
            entity_type: entity_type.into(),
            start,
            end,
            score: score.clamp(0.0, 1.0),
        }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for an empty span
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `other` lies fully within this span
    pub fn contains(&self, other: &RecognizerResult) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when the two spans share at least one byte
    pub fn overlaps(&self, other: &RecognizerResult) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when the span is non-empty and lies on char boundaries of `text`
    pub fn is_valid_for(&self, text: &str) -> bool {
        self.start < self.end && text.get(self.start..self.end).is_some()
    }

    /// The matched substring of `text`
    pub fn matched<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(RecognizerResult::new("URL", 0, 3, 1.7).score, 1.0);
        assert_eq!(RecognizerResult::new("URL", 0, 3, -0.2).score, 0.0);
    }

    #[test]
    fn test_contains_and_overlaps() {
        let email = RecognizerResult::new("EMAIL_ADDRESS", 40, 58, 1.0);
        let url = RecognizerResult::new("URL", 48, 58, 0.5);
        let phone = RecognizerResult::new("PHONE_NUMBER", 64, 75, 0.4);

        assert!(email.contains(&url));
        assert!(!url.contains(&email));
        assert!(email.overlaps(&url));
        assert!(!email.overlaps(&phone));
    }

    #[test]
    fn test_matched_respects_char_boundaries() {
        let text = "Tlf: Ærlig";
        let ok = RecognizerResult::new("PERSON", 5, 11, 0.85);
        let broken = RecognizerResult::new("PERSON", 6, 11, 0.85);

        assert_eq!(ok.matched(text), Some("Ærlig"));
        assert!(ok.is_valid_for(text));
        assert!(!broken.is_valid_for(text));
    }
}
