use thiserror::Error;

/// Caller contract violations raised by the digit buffer.
///
/// These are programming errors on the caller side (the keypad must only
/// produce digits), so nothing retries them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// A push received something other than `0`-`9`.
    #[error("only numbers are allowed, got {0:?}")]
    NotADigit(char),

    /// `set_from_duration` received a negative value.
    #[error("duration must not be negative, got {0} ms")]
    NegativeDuration(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidInputError::NotADigit('x').to_string(),
            "only numbers are allowed, got 'x'"
        );
        assert_eq!(
            InvalidInputError::NegativeDuration(-5).to_string(),
            "duration must not be negative, got -5 ms"
        );
    }
}
