//! Output modes and per-mode results

use super::RecognizerResult;
use crate::domain::RedaktError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the anonymization result is represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Each match replaced with `<ENTITY_TYPE>`
    TaggedText,
    /// Span metadata instead of modified text
    DetailedInfo,
    /// Each match replaced with a synthetic value of the same type
    ReplacedText,
}

impl OutputMode {
    /// Wire name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaggedText => "tagged_text",
            Self::DetailedInfo => "detailed_info",
            Self::ReplacedText => "replaced_text",
        }
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::TaggedText
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = RedaktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tagged_text" | "tagged" => Ok(Self::TaggedText),
            "detailed_info" | "detailed" => Ok(Self::DetailedInfo),
            "replaced_text" | "substituted" => Ok(Self::ReplacedText),
            other => Err(RedaktError::UnsupportedMode(other.to_string())),
        }
    }
}

/// One detected entity in detailed mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Entity type label
    pub entity_type: String,
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
    /// Recognizer confidence
    pub score: f32,
    /// The literal matched substring
    pub entity: String,
}

impl EntityRecord {
    /// Build a record from a match; `None` if the span does not fit the text
    pub fn from_result(text: &str, result: &RecognizerResult) -> Option<Self> {
        let entity = result.matched(text)?;
        Some(Self {
            entity_type: result.entity_type.clone(),
            start: result.start,
            end: result.end,
            score: result.score,
            entity: entity.to_string(),
        })
    }
}

/// Mode-dependent anonymization result
///
/// Serializes keyed by mode, e.g. `{"tagged_text": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnonymizeResult {
    /// Text with tags in place of matches
    TaggedText(String),
    /// Span metadata, ordered by start offset
    DetailedInfo(Vec<EntityRecord>),
    /// Text with synthetic values in place of matches
    ReplacedText(String),
}

impl AnonymizeResult {
    /// The mode this result was produced for
    pub fn mode(&self) -> OutputMode {
        match self {
            Self::TaggedText(_) => OutputMode::TaggedText,
            Self::DetailedInfo(_) => OutputMode::DetailedInfo,
            Self::ReplacedText(_) => OutputMode::ReplacedText,
        }
    }

    /// The redacted text, for the text-producing modes
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::TaggedText(text) | Self::ReplacedText(text) => Some(text),
            Self::DetailedInfo(_) => None,
        }
    }

    /// The span records, for detailed mode
    pub fn records(&self) -> Option<&[EntityRecord]> {
        match self {
            Self::DetailedInfo(records) => Some(records),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_modes() {
        assert_eq!("tagged_text".parse::<OutputMode>().unwrap(), OutputMode::TaggedText);
        assert_eq!("detailed".parse::<OutputMode>().unwrap(), OutputMode::DetailedInfo);
        assert_eq!(
            "substituted".parse::<OutputMode>().unwrap(),
            OutputMode::ReplacedText
        );
    }

    #[test]
    fn test_unknown_mode_is_rejected_verbatim() {
        let err = "bogus".parse::<OutputMode>().unwrap_err();
        assert!(matches!(err, RedaktError::UnsupportedMode(ref m) if m == "bogus"));
    }

    #[test]
    fn test_result_serializes_keyed_by_mode() {
        let result = AnonymizeResult::TaggedText("<PERSON> called".to_string());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"tagged_text": "<PERSON> called"})
        );
    }

    #[test]
    fn test_record_from_result() {
        let text = "Hello this is Jamie Clark calling";
        let result = RecognizerResult::new("PERSON", 14, 25, 0.85);
        let record = EntityRecord::from_result(text, &result).unwrap();
        assert_eq!(record.entity, "Jamie Clark");

        let out_of_range = RecognizerResult::new("PERSON", 30, 80, 0.85);
        assert!(EntityRecord::from_result(text, &out_of_range).is_none());
    }
}
