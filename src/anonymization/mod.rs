//! Anonymization module for Redakt
//!
//! This module provides PII detection and redaction for English and
//! Norwegian free text.
//!
//! # Architecture
//!
//! The anonymization pipeline consists of:
//! - **NLP**: Tokenization and stopword-based language detection
//! - **Detection**: Pattern, gazetteer, phone and Norwegian ID recognizers
//!   assembled per language in a registry
//! - **Anonymization**: Operator-based replacement (tags, random digits, fake names)
//! - **Engine**: The [`PiiAnonymizer`] facade selecting one of three output modes
//!
//! # Usage
//!
//! ```rust,ignore
//! use redakt::anonymization::{AnonymizationConfig, PiiAnonymizer};
//!
//! let engine = PiiAnonymizer::new(AnonymizationConfig::default())?;
//! let result = engine.anonymize_text(text, "detailed_info", None, "no")?;
//! ```

pub mod anonymizer;
pub mod config;
pub mod detector;
pub mod engine;
pub mod models;
pub mod nlp;

// Re-export main types
pub use config::AnonymizationConfig;
pub use engine::PiiAnonymizer;
pub use models::{AnonymizeResult, EntityRecord, OutputMode, RecognizerResult};
