//! Configuration management for Redakt.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Redakt uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `REDAKT_<SECTION>_<KEY>` environment overrides
//! - Default values for every section
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use redakt::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("redakt.toml")?;
//! println!("Listening on {}", config.server.bind_address());
//! println!("Default language: {}", config.anonymization.default_language);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ServerConfig`] - HTTP bind address and batch limit
//! - [`AnonymizationConfig`](crate::anonymization::AnonymizationConfig) - Languages, thresholds, phone regions, pattern library
//! - [`LoggingConfig`] - Console format and rolling file output
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! max_batch_size = 100
//!
//! [anonymization]
//! default_language = "no"
//! score_threshold = 0.0
//! default_phone_regions = ["US", "UK", "DE", "IL", "IN", "CA", "BR"]
//! pattern_library = "${REDAKT_PATTERN_LIBRARY}"
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/redakt"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, RedaktConfig, ServerConfig};
