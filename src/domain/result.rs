//! Result type alias for Redakt

use super::errors::RedaktError;

/// Result type alias for Redakt operations
///
/// # Examples
///
/// ```
/// use redakt::domain::result::Result;
/// use redakt::domain::errors::RedaktError;
///
/// fn failing_function() -> Result<()> {
///     Err(RedaktError::UnsupportedMode("bogus".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RedaktError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
