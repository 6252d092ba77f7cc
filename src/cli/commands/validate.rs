//! Validate config command implementation
//!
//! Loads the configuration file, validates it, and checks that the pattern
//! library and phone regions it names can actually be loaded.

use crate::anonymization::PiiAnonymizer;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded and validated");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        match PiiAnonymizer::new(config.anonymization.clone()) {
            Ok(_) => println!("✅ Recognizers built successfully"),
            Err(e) => {
                println!("❌ Failed to build recognizers");
                println!("   Error: {e}");
                return Ok(2);
            }
        }

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Listen Address: {}", config.server.bind_address());
        println!("  Max Batch Size: {}", config.server.max_batch_size);
        println!(
            "  Default Language: {}",
            config.anonymization.default_language
        );
        println!(
            "  Score Threshold: {}",
            config.anonymization.score_threshold
        );
        println!(
            "  Phone Regions: {}",
            config.anonymization.default_phone_regions.join(", ")
        );
        match config.anonymization.pattern_library {
            Some(ref path) => println!("  Pattern Library: {}", path.display()),
            None => println!("  Pattern Library: built-in"),
        }
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let args = ValidateArgs {};
        assert_eq!(args.execute("does-not-exist.toml").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[server]\nport = 8081\n").unwrap();
        file.flush().unwrap();

        let args = ValidateArgs {};
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(args.execute(&path).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_validate_unknown_region() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[anonymization]\ndefault_phone_regions = [\"XX\"]\n")
            .unwrap();
        file.flush().unwrap();

        let args = ValidateArgs {};
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(args.execute(&path).await.unwrap(), 2);
    }
}
