//! Text parsing and language identification
//!
//! Recognizers never see raw characters only: they receive the
//! [`NlpArtifacts`] produced once per request by the [`Tokenizer`].

pub mod language;
pub mod tokenizer;

pub use language::{LanguageDetector, UNDETERMINED};
pub use tokenizer::Tokenizer;

use crate::anonymization::models::NlpArtifacts;

/// Parsing collaborator used by the analyzer
pub trait NlpEngine: Send + Sync {
    /// Segment text into tokens with offsets and digit flags
    fn parse(&self, text: &str) -> NlpArtifacts;
}
