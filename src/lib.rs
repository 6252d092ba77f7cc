// Redakt - PII detection and redaction for English and Norwegian text
// Copyright (c) 2025 Redakt Contributors
// Licensed under the MIT License

//! # Redakt - PII detection and redaction
//!
//! Redakt finds personally identifying information in free text and either
//! tags it, reports it, or replaces it with synthetic values. English and
//! Norwegian are supported, including Norwegian national identity numbers
//! and Norwegian-region phone numbers.
//!
//! ## Architecture
//!
//! - [`anonymization`] - Recognizers, analysis, redaction operators and the
//!   [`PiiAnonymizer`](anonymization::PiiAnonymizer) facade
//! - [`server`] - HTTP shell (`/ping`, `/invocations`)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration management
//! - [`domain`] - Error types
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use redakt::anonymization::{AnonymizationConfig, AnonymizeResult, PiiAnonymizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let anonymizer = PiiAnonymizer::new(AnonymizationConfig::default())?;
//!
//! let result = anonymizer.anonymize_text(
//!     "Ring meg på 98 45 76 29",
//!     "tagged_text",
//!     None,
//!     "no",
//! )?;
//!
//! if let AnonymizeResult::TaggedText(text) = result {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Modes
//!
//! - **tagged_text**: every detection is replaced by `<ENTITY_TYPE>`
//! - **detailed_info**: one record per detection with offsets, score and value
//! - **replaced_text**: Norwegian IDs and person names get synthetic values,
//!   everything else is tagged
//!
//! ## Error Handling
//!
//! Library calls return [`domain::Result`], carrying a [`domain::RedaktError`].
//! Unsupported languages and modes are caller errors and are reported as
//! such by the HTTP shell.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod server;
