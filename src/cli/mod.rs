//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Redakt using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Redakt - PII detection and redaction service
#[derive(Parser, Debug)]
#[command(name = "redakt")]
#[command(version, about, long_about = None)]
#[command(author = "Redakt Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "redakt.toml", env = "REDAKT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REDAKT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve(commands::serve::ServeArgs),

    /// Anonymize a single text and print the result as JSON
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Print the detected language code of a text
    DetectLanguage(commands::detect::DetectArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["redakt", "serve"]);
        assert_eq!(cli.config, "redakt.toml");
        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["redakt", "--config", "custom.toml", "serve"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["redakt", "--log-level", "debug", "serve"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_serve_overrides() {
        let cli = Cli::parse_from(["redakt", "serve", "--host", "127.0.0.1", "--port", "9000"]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(9000));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_anonymize() {
        let cli = Cli::parse_from([
            "redakt",
            "anonymize",
            "--mode",
            "detailed_info",
            "--lang",
            "no",
            "--entities",
            "PERSON,PHONE_NUMBER",
            "Kari Nordmann",
        ]);
        match cli.command {
            Commands::Anonymize(args) => {
                assert_eq!(args.mode, "detailed_info");
                assert_eq!(args.lang.as_deref(), Some("no"));
                assert_eq!(
                    args.entities,
                    Some(vec!["PERSON".to_string(), "PHONE_NUMBER".to_string()])
                );
                assert_eq!(args.text.as_deref(), Some("Kari Nordmann"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_anonymize_defaults() {
        let cli = Cli::parse_from(["redakt", "anonymize"]);
        match cli.command {
            Commands::Anonymize(args) => {
                assert_eq!(args.mode, "tagged_text");
                assert!(args.lang.is_none());
                assert!(args.entities.is_none());
                assert!(args.text.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_detect_language() {
        let cli = Cli::parse_from(["redakt", "detect-language", "hei verden"]);
        assert!(matches!(cli.command, Commands::DetectLanguage(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["redakt", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["redakt", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
