//! Anonymization configuration

use crate::anonymization::detector::phone::DEFAULT_REGIONS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Languages the orchestrator accepts
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "no"];

/// Detection and redaction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Language used when a request does not name one
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Results scoring below this are dropped (0.0 - 1.0)
    #[serde(default)]
    pub score_threshold: f32,

    /// Phone regions for the built-in phone recognizer of every language
    #[serde(default = "default_phone_regions")]
    pub default_phone_regions: Vec<String>,

    /// Path to pattern library TOML file; the embedded library when unset
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_phone_regions() -> Vec<String> {
    DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect()
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            score_threshold: 0.0,
            default_phone_regions: default_phone_regions(),
            pattern_library: None,
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !SUPPORTED_LANGUAGES.contains(&self.default_language.as_str()) {
            return Err(format!(
                "Invalid anonymization.default_language '{}'. Must be one of: {}",
                self.default_language,
                SUPPORTED_LANGUAGES.join(", ")
            ));
        }

        if !self.score_threshold.is_finite() || !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(format!(
                "anonymization.score_threshold must be within 0.0 - 1.0, got {}",
                self.score_threshold
            ));
        }

        if self.default_phone_regions.is_empty() {
            return Err("anonymization.default_phone_regions cannot be empty".to_string());
        }

        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(format!("Pattern library file not found: {}", path.display()));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                ));
            }
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("REDAKT_ANONYMIZATION_DEFAULT_LANGUAGE") {
            self.default_language = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("REDAKT_ANONYMIZATION_SCORE_THRESHOLD") {
            self.score_threshold = val
                .parse()
                .context("Invalid REDAKT_ANONYMIZATION_SCORE_THRESHOLD value")?;
        }

        if let Ok(val) = std::env::var("REDAKT_ANONYMIZATION_DEFAULT_PHONE_REGIONS") {
            self.default_phone_regions = val
                .split(',')
                .map(|r| r.trim().to_uppercase())
                .filter(|r| !r.is_empty())
                .collect();
        }

        if let Ok(val) = std::env::var("REDAKT_ANONYMIZATION_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        Ok(())
    }
}
