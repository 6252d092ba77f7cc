//! Pattern library for PII detection
//!
//! The library is a TOML document with three sections: pattern recognizer
//! definitions, phone number formats keyed by region code, and the first-name
//! gazetteer. A default library is embedded in the binary; deployments can
//! point `anonymization.pattern_library` at their own file.

use crate::domain::{RedaktError, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Extra check a pattern match must pass before it is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Accept every match
    #[default]
    None,
    /// Luhn checksum over the digits of the match
    Luhn,
    /// ISO 13616 mod-97 check
    Iban,
    /// Must parse as an IPv4 or IPv6 address
    Ip,
}

/// Pattern recognizer definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Entity type label reported for matches
    pub entity: String,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Regex patterns
    pub patterns: Vec<String>,
    /// Post-match validation
    #[serde(default)]
    pub validation: Validation,
    /// Languages the recognizer is registered for; empty means all
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PhoneRegionDefinition {
    patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct NameDefinitions {
    #[serde(default)]
    first_names: Vec<String>,
}

/// Library container as found on disk
#[derive(Debug, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    recognizers: BTreeMap<String, PatternDefinition>,
    #[serde(default)]
    phone_regions: BTreeMap<String, PhoneRegionDefinition>,
    #[serde(default)]
    names: NameDefinitions,
}

/// Compiled pattern recognizer definition
#[derive(Debug, Clone)]
pub struct CompiledPatternSet {
    /// Definition name (TOML key)
    pub name: String,
    /// Entity type label
    pub entity: String,
    /// Compiled regexes
    pub regexes: Vec<Regex>,
    /// Confidence score
    pub confidence: f32,
    /// Post-match validation
    pub validation: Validation,
    /// Languages; empty means all
    pub languages: Vec<String>,
}

impl CompiledPatternSet {
    /// Whether this set should be registered for `language`
    pub fn applies_to(&self, language: &str) -> bool {
        self.languages.is_empty() || self.languages.iter().any(|l| l == language)
    }
}

/// Compiled pattern library
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    pattern_sets: Vec<CompiledPatternSet>,
    phone_regions: BTreeMap<String, Vec<Regex>>,
    first_names: Arc<HashSet<String>>,
}

impl PatternLibrary {
    /// Load a library from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RedaktError::PatternLibrary(format!(
                "Failed to read pattern library {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Load a library from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: LibraryFile = toml::from_str(content).map_err(|e| {
            RedaktError::PatternLibrary(format!("Failed to parse pattern library TOML: {e}"))
        })?;

        let mut pattern_sets = Vec::with_capacity(library.recognizers.len());
        for (name, def) in library.recognizers {
            if !def.confidence.is_finite() || !(0.0..=1.0).contains(&def.confidence) {
                return Err(RedaktError::PatternLibrary(format!(
                    "Confidence for '{}' must be within 0.0 - 1.0, got {}",
                    name, def.confidence
                )));
            }
            if def.entity.trim().is_empty() {
                return Err(RedaktError::PatternLibrary(format!(
                    "Recognizer '{name}' has an empty entity"
                )));
            }

            let regexes = compile_all(&name, &def.patterns)?;
            pattern_sets.push(CompiledPatternSet {
                name,
                entity: def.entity,
                regexes,
                confidence: def.confidence,
                validation: def.validation,
                languages: def.languages,
            });
        }

        let mut phone_regions = BTreeMap::new();
        for (code, def) in library.phone_regions {
            let regexes = compile_all(&format!("phone_regions.{code}"), &def.patterns)?;
            phone_regions.insert(code.to_uppercase(), regexes);
        }

        let first_names = library
            .names
            .first_names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        Ok(Self {
            pattern_sets,
            phone_regions,
            first_names: Arc::new(first_names),
        })
    }

    /// The library embedded in the binary
    pub fn default_library() -> Result<Self> {
        let default_toml = include_str!("../../../../patterns/recognizers.toml");
        Self::from_toml(default_toml)
    }

    /// All pattern recognizer definitions
    pub fn pattern_sets(&self) -> &[CompiledPatternSet] {
        &self.pattern_sets
    }

    /// Phone patterns for a region code
    pub fn phone_region(&self, code: &str) -> Option<&[Regex]> {
        self.phone_regions
            .get(&code.to_uppercase())
            .map(|v| v.as_slice())
    }

    /// Every region code known to the library
    pub fn region_codes(&self) -> Vec<String> {
        self.phone_regions.keys().cloned().collect()
    }

    /// First-name gazetteer
    pub fn first_names(&self) -> Arc<HashSet<String>> {
        Arc::clone(&self.first_names)
    }
}

fn compile_all(name: &str, patterns: &[String]) -> Result<Vec<Regex>> {
    if patterns.is_empty() {
        return Err(RedaktError::PatternLibrary(format!(
            "'{name}' defines no patterns"
        )));
    }

    patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|e| {
                RedaktError::PatternLibrary(format!("Invalid regex in '{name}': {p}: {e}"))
            })
        })
        .collect()
}
