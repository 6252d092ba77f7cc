//! Operator set
//!
//! Sparse mapping from entity type to operator. Unmapped types fall back to
//! tag redaction.

use super::{FakeNameOperator, Operator, RandomDigitsOperator, TagOperator};
use crate::anonymization::models::entities;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Per-entity operator overrides
#[derive(Clone, Default)]
pub struct OperatorSet {
    overrides: HashMap<String, Arc<dyn Operator>>,
    fallback: TagOperator,
}

impl OperatorSet {
    /// No overrides: every entity is tagged
    pub fn empty() -> Self {
        Self::default()
    }

    /// Overrides used for substitution output
    ///
    /// `NORWEGIAN_ID` becomes 11 random digits and `PERSON` a fake name.
    pub fn substitution() -> Self {
        Self::empty()
            .with(entities::NORWEGIAN_ID, RandomDigitsOperator::default())
            .with(entities::PERSON, FakeNameOperator::new())
    }

    /// Add or replace the operator for an entity type
    pub fn with(mut self, entity_type: impl Into<String>, operator: impl Operator + 'static) -> Self {
        self.overrides.insert(entity_type.into(), Arc::new(operator));
        self
    }

    /// The operator to use for an entity type
    pub fn operator_for(&self, entity_type: &str) -> &dyn Operator {
        match self.overrides.get(entity_type) {
            Some(operator) => operator.as_ref(),
            None => &self.fallback,
        }
    }

    /// Whether an entity type has an override
    pub fn has_override(&self, entity_type: &str) -> bool {
        self.overrides.contains_key(entity_type)
    }
}

impl fmt::Debug for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.overrides.keys().collect();
        keys.sort();
        f.debug_struct("OperatorSet").field("overrides", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_overrides_are_sparse() {
        let set = OperatorSet::substitution();
        assert!(set.has_override("NORWEGIAN_ID"));
        assert!(set.has_override("PERSON"));
        assert!(!set.has_override("EMAIL_ADDRESS"));
        assert_eq!(
            set.operator_for("EMAIL_ADDRESS").operate("EMAIL_ADDRESS", "a@b.no"),
            "<EMAIL_ADDRESS>"
        );
    }

    #[test]
    fn test_empty_set_tags_everything() {
        let set = OperatorSet::empty();
        assert_eq!(set.operator_for("PERSON").operate("PERSON", "Kari"), "<PERSON>");
    }

    #[test]
    fn test_custom_override() {
        let set = OperatorSet::empty().with("PHONE_NUMBER", RandomDigitsOperator::new(8));
        let value = set.operator_for("PHONE_NUMBER").operate("PHONE_NUMBER", "98457629");
        assert_eq!(value.len(), 8);
        assert!(format!("{set:?}").contains("PHONE_NUMBER"));
    }
}
