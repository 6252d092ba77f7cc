//! Anonymize command implementation
//!
//! Runs one text through the anonymizer and prints the result as JSON, in the
//! same shape as one entry of the HTTP `output` array.

use crate::anonymization::PiiAnonymizer;
use crate::config::load_config_or_default;
use clap::Args;
use std::io::Read;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Output mode (tagged_text, detailed_info, replaced_text)
    #[arg(short, long, default_value = "tagged_text")]
    pub mode: String,

    /// Language code, or "unknown" to detect; defaults to the configured language
    #[arg(long)]
    pub lang: Option<String>,

    /// Comma-separated entity types to look for (default: all)
    #[arg(short, long, value_delimiter = ',')]
    pub entities: Option<Vec<String>>,

    /// Text to anonymize; read from stdin when omitted
    pub text: Option<String>,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (config, _) = match load_config_or_default(config_path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let anonymizer = match PiiAnonymizer::new(config.anonymization) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("❌ Failed to build anonymizer: {e}");
                return Ok(2);
            }
        };

        let text = match self.text {
            Some(ref text) => text.clone(),
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        let lang = self
            .lang
            .as_deref()
            .unwrap_or_else(|| anonymizer.default_language());

        // `--entities ""` parses to a single blank entry
        let entities: Option<Vec<String>> = self.entities.as_ref().map(|list| {
            list.iter()
                .map(|e| e.trim())
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect()
        });

        match anonymizer.anonymize_text(&text, &self.mode, entities.as_deref(), lang) {
            Ok(result) => {
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(0)
            }
            Err(e) if e.is_input_error() => {
                eprintln!("❌ {e}");
                Ok(2)
            }
            Err(e) => Err(e.into()),
        }
    }
}
