//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "redakt.toml")]
    pub output: String,

    /// Include every option with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: redakt validate-config");
                println!("  3. Start the service: redakt serve");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Redakt Configuration File
# PII detection and redaction for English and Norwegian text

[application]
log_level = "info"

[server]
host = "0.0.0.0"
port = 8080

[anonymization]
default_language = "en"
"#
        .to_string()
    }

    /// Generate configuration with every option documented
    fn generate_config_with_examples() -> String {
        r#"# Redakt Configuration File
# PII detection and redaction for English and Norwegian text
#
# Values can reference environment variables with ${VAR_NAME}.
# Any key can also be overridden with REDAKT_<SECTION>_<KEY>,
# e.g. REDAKT_SERVER_PORT=9000.

[application]
# trace, debug, info, warn, error
log_level = "info"

[server]
host = "0.0.0.0"
port = 8080
# Maximum number of input items in one /invocations request
max_batch_size = 100

[anonymization]
# Language used when a request item has no "lang" (en, no)
default_language = "en"
# Drop detections scoring below this value (0.0 - 1.0)
score_threshold = 0.0
# Phone number regions for the built-in phone recognizer.
# Norwegian requests additionally accept every known region.
default_phone_regions = ["US", "UK", "DE", "IL", "IN", "CA", "BR"]
# Custom pattern library (TOML); the built-in library is used when unset
# pattern_library = "/etc/redakt/recognizers.toml"

[logging]
# Write JSON logs to rotating files
local_enabled = false
local_path = "/var/log/redakt"
# daily, hourly, never
local_rotation = "daily"
# JSON console output (for log collectors)
json_console = false
"#
        .to_string()
    }
}
