//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable or JSON console output
//! - Configurable log levels
//! - Local JSON file logging with rotation
//!
//! Log events never carry the analyzed text or matched values, only
//! counts, languages, modes and offsets.
//!
//! # Example
//!
//! ```no_run
//! use redakt::logging::init_logging;
//! use redakt::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an invocation
///
/// # Example
///
/// ```no_run
/// use redakt::log_request_start;
///
/// let request_id = "4f1c";
/// log_request_start!(request_id, 3);
/// ```
#[macro_export]
macro_rules! log_request_start {
    ($request_id:expr, $items:expr) => {
        tracing::info!(
            request_id = %$request_id,
            items = $items,
            "Processing invocation"
        );
    };
}

/// Log the completion of an invocation
///
/// # Example
///
/// ```no_run
/// use redakt::log_request_complete;
/// use std::time::Duration;
///
/// log_request_complete!("4f1c", 3, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_request_complete {
    ($request_id:expr, $items:expr, $duration:expr) => {
        tracing::info!(
            request_id = %$request_id,
            items = $items,
            duration_ms = $duration.as_millis() as u64,
            "Invocation completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use redakt::log_error_with_context;
/// use redakt::domain::RedaktError;
///
/// let error = RedaktError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::RedaktError;
    use std::time::Duration;

    #[test]
    fn test_macros_expand_without_subscriber() {
        let error = RedaktError::UnsupportedMode("bogus".to_string());
        crate::log_request_start!("req-1", 2usize);
        crate::log_request_complete!("req-1", 2usize, Duration::from_millis(5));
        crate::log_error_with_context!(&error, "Invocation failed");
    }
}
