//! Fake-value substitution operators

use super::Operator;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// Length of a Norwegian ID replacement
pub const NORWEGIAN_ID_DIGITS: usize = 11;

/// Replaces a span with a random numeral string of fixed length
#[derive(Debug, Clone, Copy)]
pub struct RandomDigitsOperator {
    length: usize,
}

impl RandomDigitsOperator {
    /// Create an operator producing `length` digits
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomDigitsOperator {
    fn default() -> Self {
        Self::new(NORWEGIAN_ID_DIGITS)
    }
}

impl Operator for RandomDigitsOperator {
    fn operate(&self, _entity_type: &str, _matched: &str) -> String {
        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}

/// Replaces a span with a generated person name
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeNameOperator;

impl FakeNameOperator {
    /// Create a new fake name operator
    pub fn new() -> Self {
        Self
    }
}

impl Operator for FakeNameOperator {
    fn operate(&self, _entity_type: &str, _matched: &str) -> String {
        Name().fake::<String>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_digits() {
        let operator = RandomDigitsOperator::default();
        let value = operator.operate("NORWEGIAN_ID", "01019012345");
        assert_eq!(value.len(), 11);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_random_digits_custom_length() {
        let value = RandomDigitsOperator::new(4).operate("PIN", "1234");
        assert_eq!(value.len(), 4);
    }

    #[test]
    fn test_fake_name() {
        let value = FakeNameOperator::new().operate("PERSON", "Jamie Clark");
        assert!(!value.trim().is_empty());
        assert!(!value.contains('<'));
    }
}
