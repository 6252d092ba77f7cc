//! Tag redaction operator

use super::Operator;

/// Replaces a span with `<ENTITY_TYPE>`
#[derive(Debug, Clone, Copy, Default)]
pub struct TagOperator;

impl TagOperator {
    /// Create a new tag operator
    pub fn new() -> Self {
        Self
    }
}

impl Operator for TagOperator {
    fn operate(&self, entity_type: &str, _matched: &str) -> String {
        format!("<{entity_type}>")
    }
}
