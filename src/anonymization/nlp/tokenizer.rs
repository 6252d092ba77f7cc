//! Regex-based word tokenizer

use super::NlpEngine;
use crate::anonymization::models::{NlpArtifacts, Token};
use crate::domain::{RedaktError, Result};
use regex::Regex;

/// Default token pattern: runs of word characters, or a single punctuation mark
const DEFAULT_PATTERN: &str = r"\w+|[^\w\s]";

/// Splits text into word and punctuation tokens
///
/// Whitespace never becomes a token. Offsets are byte offsets.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Create a tokenizer with the default pattern
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a tokenizer with a custom pattern
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            RedaktError::Configuration(format!("Invalid tokenizer pattern: {e}"))
        })?;
        Ok(Self { pattern })
    }

    /// Tokenize text
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.pattern
            .find_iter(text)
            .map(|m| Token::new(m.as_str(), m.start()))
            .collect()
    }
}

impl NlpEngine for Tokenizer {
    fn parse(&self, text: &str) -> NlpArtifacts {
        NlpArtifacts::new(self.tokenize(text))
    }
}
