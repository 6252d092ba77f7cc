//! Detect-language command implementation

use crate::anonymization::nlp::LanguageDetector;
use clap::Args;

/// Arguments for the detect-language command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Text to classify
    pub text: String,
}

impl DetectArgs {
    /// Execute the detect-language command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let language = LanguageDetector::new().detect_language(&self.text);
        tracing::debug!(language = %language, "Language detected");
        println!("{language}");
        Ok(0)
    }
}
