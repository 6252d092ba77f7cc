//! Domain error types
//!
//! This module defines the error hierarchy for Redakt. Caller input errors
//! (unsupported language or mode) are kept distinct from setup errors so the
//! HTTP shell and CLI can map them to the right response.

use thiserror::Error;

/// Main Redakt error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum RedaktError {
    /// Requested or detected language is not one of the supported languages
    #[error("Support for language {0} is not implemented yet!")]
    UnsupportedLanguage(String),

    /// Output mode string is not recognized
    #[error("Mode {0} not supported!")]
    UnsupportedMode(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library could not be loaded or compiled
    #[error("Pattern library error: {0}")]
    PatternLibrary(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),
}

impl RedaktError {
    /// Whether the error was caused by the caller's input rather than by setup
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedLanguage(_) | Self::UnsupportedMode(_)
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RedaktError {
    fn from(err: std::io::Error) -> Self {
        RedaktError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RedaktError {
    fn from(err: serde_json::Error) -> Self {
        RedaktError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RedaktError {
    fn from(err: toml::de::Error) -> Self {
        RedaktError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_display() {
        let err = RedaktError::UnsupportedLanguage("es".to_string());
        assert_eq!(
            err.to_string(),
            "Support for language es is not implemented yet!"
        );
    }

    #[test]
    fn test_unsupported_mode_display() {
        let err = RedaktError::UnsupportedMode("random".to_string());
        assert_eq!(err.to_string(), "Mode random not supported!");
    }

    #[test]
    fn test_is_input_error() {
        assert!(RedaktError::UnsupportedLanguage("es".to_string()).is_input_error());
        assert!(RedaktError::UnsupportedMode("bogus".to_string()).is_input_error());
        assert!(!RedaktError::Configuration("bad".to_string()).is_input_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: RedaktError = io_err.into();
        assert!(matches!(err, RedaktError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RedaktError = json_err.into();
        assert!(matches!(err, RedaktError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: RedaktError = toml_err.into();
        assert!(matches!(err, RedaktError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_redakt_error_implements_std_error() {
        let err = RedaktError::Server("bind failed".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
