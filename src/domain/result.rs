//! Result type alias for Agendei
//!
//! This module provides a convenient Result type alias that uses AgendeiError
//! as the error type.

use super::errors::AgendeiError;

/// Result type alias for Agendei operations
///
/// This is a convenience type alias that uses `AgendeiError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use agendei::domain::result::Result;
/// use agendei::domain::errors::AgendeiError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AgendeiError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AgendeiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AgendeiError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(AgendeiError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

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
