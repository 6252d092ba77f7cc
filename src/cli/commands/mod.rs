//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod anonymize;
pub mod detect;
pub mod init;
pub mod serve;
pub mod validate;
