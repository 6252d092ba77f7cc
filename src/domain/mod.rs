//! Domain types shared by every layer of Redakt.
//!
//! The domain layer provides:
//! - **Error types** ([`RedaktError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, RedaktError>`]:
//!
//! ```rust
//! use redakt::domain::{RedaktError, Result};
//!
//! fn check_language(lang: &str) -> Result<()> {
//!     if lang != "en" && lang != "no" {
//!         return Err(RedaktError::UnsupportedLanguage(lang.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::RedaktError;
pub use result::Result;
