//! Anonymization operator module
//!
//! Provides the replacement operators and the engine that applies them to
//! detected spans.

pub mod operators;
pub mod redaction;
pub mod substitution;

pub use operators::OperatorSet;
pub use redaction::TagOperator;
pub use substitution::{FakeNameOperator, RandomDigitsOperator};

use crate::anonymization::models::RecognizerResult;

/// Trait for replacement operators
///
/// Operators are shared read-only across requests, so they take `&self`.
pub trait Operator: Send + Sync {
    /// Produce the replacement for one matched span
    fn operate(&self, entity_type: &str, matched: &str) -> String;
}

/// Applies operators to a text at the given spans
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymizerEngine;

impl AnonymizerEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Replace every accepted span of `text` using `operators`
    ///
    /// Overlapping spans are resolved first: higher score wins, then the
    /// longer span, then the earlier one. Replacement runs right-to-left so
    /// offsets of the remaining spans stay valid.
    pub fn anonymize(
        &self,
        text: &str,
        results: &[RecognizerResult],
        operators: &OperatorSet,
    ) -> String {
        let accepted = resolve_conflicts(text, results);

        let mut output = text.to_string();
        for result in accepted.iter().rev() {
            let matched = &text[result.start..result.end];
            let replacement = operators
                .operator_for(&result.entity_type)
                .operate(&result.entity_type, matched);
            output.replace_range(result.start..result.end, &replacement);
        }

        output
    }
}

/// Pick a non-overlapping subset of valid spans, sorted by start
fn resolve_conflicts(text: &str, results: &[RecognizerResult]) -> Vec<RecognizerResult> {
    let mut candidates: Vec<&RecognizerResult> =
        results.iter().filter(|r| r.is_valid_for(text)).collect();
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.len().cmp(&a.len()))
            .then(a.start.cmp(&b.start))
    });

    let mut accepted: Vec<RecognizerResult> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !accepted.iter().any(|a| a.overlaps(candidate)) {
            accepted.push(candidate.clone());
        }
    }

    accepted.sort_by_key(|r| r.start);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_replace_spans() {
        let text = "Hello this is Jamie Clark calling, my phone number is 212-555-5555";
        let results = vec![
            RecognizerResult::new("PHONE_NUMBER", 54, 66, 0.4),
            RecognizerResult::new("PERSON", 14, 25, 0.85),
        ];

        let output = AnonymizerEngine::new().anonymize(text, &results, &OperatorSet::empty());
        assert_eq!(
            output,
            "Hello this is <PERSON> calling, my phone number is <PHONE_NUMBER>"
        );
    }

    #[test]
    fn test_higher_score_wins_overlap() {
        let text = "E-post: ahansen@blabla.com";
        let results = vec![
            RecognizerResult::new("EMAIL_ADDRESS", 8, 26, 1.0),
            RecognizerResult::new("URL", 16, 26, 0.5),
        ];

        let output = AnonymizerEngine::new().anonymize(text, &results, &OperatorSet::empty());
        assert_eq!(output, "E-post: <EMAIL_ADDRESS>");
    }

    #[test]
    fn test_longer_span_wins_equal_score() {
        let text = "abcdefghij";
        let results = vec![
            RecognizerResult::new("A", 0, 4, 0.5),
            RecognizerResult::new("B", 2, 10, 0.5),
        ];

        let output = AnonymizerEngine::new().anonymize(text, &results, &OperatorSet::empty());
        assert_eq!(output, "ab<B>");
    }

    #[test]
    fn test_invalid_spans_are_skipped() {
        let text = "Ærlig talt";
        let results = vec![
            RecognizerResult::new("PERSON", 1, 5, 0.9),
            RecognizerResult::new("PERSON", 20, 25, 0.9),
        ];

        let output = AnonymizerEngine::new().anonymize(text, &results, &OperatorSet::empty());
        assert_eq!(output, text);
    }

    #[test]
    fn test_no_results_returns_text() {
        let output = AnonymizerEngine::new().anonymize("nothing here", &[], &OperatorSet::empty());
        assert_eq!(output, "nothing here");
    }

    #[test]
    fn test_operator_override() {
        let text = "fnr 01019012345";
        let results = vec![RecognizerResult::new("NORWEGIAN_ID", 4, 15, 0.95)];

        let output =
            AnonymizerEngine::new().anonymize(text, &results, &OperatorSet::substitution());
        let replaced = &output[4..];
        assert_eq!(replaced.len(), 11);
        assert!(replaced.chars().all(|c| c.is_ascii_digit()));
    }
}
