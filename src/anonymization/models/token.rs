//! Token and NLP artifact models

use serde::Serialize;

/// A unit of segmented text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token text as it appears in the input
    pub text: String,
    /// Byte offset of the token in the input
    pub start: usize,
    /// True when every character is an ASCII digit
    pub is_digit: bool,
}

impl Token {
    /// Create a token, deriving the digit flag from its text
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let is_digit = !text.is_empty() && text.chars().all(|c| c.is_ascii_digit());
        Self {
            text,
            start,
            is_digit,
        }
    }

    /// Byte offset one past the end of the token
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// True when the token starts with an uppercase letter followed only by lowercase letters
    pub fn is_title_case(&self) -> bool {
        let mut chars = self.text.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() => {
                let rest: Vec<char> = chars.collect();
                !rest.is_empty() && rest.iter().all(|c| c.is_lowercase())
            }
            _ => false,
        }
    }
}

/// Output of the parsing collaborator, consumed read-only by recognizers
#[derive(Debug, Clone, Default, Serialize)]
pub struct NlpArtifacts {
    /// Tokens in document order
    pub tokens: Vec<Token>,
}

impl NlpArtifacts {
    /// Wrap a token list
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no tokens were produced
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_flag() {
        assert!(Token::new("01019012345", 0).is_digit);
        assert!(!Token::new("0101901234a", 0).is_digit);
        assert!(!Token::new("", 0).is_digit);
        assert!(!Token::new("١٢٣", 0).is_digit);
    }

    #[test]
    fn test_end_offset() {
        let token = Token::new("Hansen", 9);
        assert_eq!(token.end(), 15);
    }

    #[test]
    fn test_title_case() {
        assert!(Token::new("Jamie", 0).is_title_case());
        assert!(Token::new("Øystein", 0).is_title_case());
        assert!(!Token::new("IT", 0).is_title_case());
        assert!(!Token::new("calling", 0).is_title_case());
        assert!(!Token::new("A", 0).is_title_case());
    }
}
