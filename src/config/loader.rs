//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RedaktConfig;
use crate::domain::errors::RedaktError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern should compile")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RedaktConfig
/// 4. Applies environment variable overrides (REDAKT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use redakt::config::loader::load_config;
///
/// let config = load_config("redakt.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RedaktConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RedaktError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RedaktError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: RedaktConfig = toml::from_str(&contents)
        .map_err(|e| RedaktError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration from a file if it exists, otherwise uses defaults
///
/// Environment overrides and validation apply in both cases. The returned
/// flag tells whether a file was read.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<(RedaktConfig, bool)> {
    let path = path.as_ref();
    if path.exists() {
        return Ok((load_config(path)?, true));
    }

    let mut config = RedaktConfig::default();
    finish(&mut config)?;
    Ok((config, false))
}

fn finish(config: &mut RedaktConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        RedaktError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_PLACEHOLDER.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(RedaktError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using REDAKT_* prefix
///
/// Environment variables follow the pattern: REDAKT_<SECTION>_<KEY>
/// For example: REDAKT_SERVER_PORT, REDAKT_LOGGING_LOCAL_PATH
fn apply_env_overrides(config: &mut RedaktConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("REDAKT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Server overrides
    if let Ok(val) = std::env::var("REDAKT_SERVER_HOST") {
        config.server.host = val;
    }
    if let Ok(val) = std::env::var("REDAKT_SERVER_PORT") {
        if let Ok(port) = val.parse() {
            config.server.port = port;
        }
    }
    if let Ok(val) = std::env::var("REDAKT_SERVER_MAX_BATCH_SIZE") {
        if let Ok(size) = val.parse() {
            config.server.max_batch_size = size;
        }
    }

    // Anonymization overrides
    config
        .anonymization
        .apply_env_overrides()
        .map_err(|e| RedaktError::Configuration(format!("{e:#}")))?;

    // Logging overrides
    if let Ok(val) = std::env::var("REDAKT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("REDAKT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("REDAKT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
    if let Ok(val) = std::env::var("REDAKT_LOGGING_JSON_CONSOLE") {
        config.logging.json_console = val.parse().unwrap_or(false);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("REDAKT_TEST_HOST", "127.0.0.1");
        let input = "host = \"${REDAKT_TEST_HOST}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "host = \"127.0.0.1\"\n");
        std::env::remove_var("REDAKT_TEST_HOST");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("REDAKT_MISSING_VAR");
        let input = "host = \"${REDAKT_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("REDAKT_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("REDAKT_COMMENTED_VAR");
        let input = "# host = \"${REDAKT_COMMENTED_VAR}\"\nport = 9000";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${REDAKT_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let (config, from_file) = load_config_or_default("nonexistent-redakt.toml").unwrap();
        assert!(!from_file);
        assert_eq!(config.anonymization.default_language, "en");
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[server]
host = "127.0.0.1"
port = 9000
max_batch_size = 10

[anonymization]
default_language = "no"
score_threshold = 0.3
default_phone_regions = ["NO", "SE"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.server.max_batch_size, 10);
        assert_eq!(config.anonymization.default_language, "no");
        assert_eq!(config.anonymization.default_phone_regions, vec!["NO", "SE"]);
    }

    #[test]
    fn test_load_config_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[logging]\nlocal_rotation = \"weekly\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("local_rotation"));
    }
}
