//! Error types for template expansion.

use thiserror::Error;

/// Errors raised by the random-string generator.
///
/// The tag engine never surfaces these; a placeholder whose parameters fail
/// here is left in the output verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Length argument is not a base-10 non-negative integer that fits `usize`
    #[error("invalid random length '{0}': expected a non-negative integer")]
    InvalidLength(String),

    /// Length parses but is above the generator ceiling
    #[error("random length {length} exceeds the maximum of {max}")]
    LengthTooLarge {
        /// Requested length
        length: usize,
        /// Largest accepted length
        max: usize,
    },
}

/// Result type alias for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TemplateError::InvalidLength("12x".to_string());
        assert_eq!(
            err.to_string(),
            "invalid random length '12x': expected a non-negative integer"
        );

        let err = TemplateError::LengthTooLarge {
            length: 5000,
            max: 4096,
        };
        assert_eq!(err.to_string(), "random length 5000 exceeds the maximum of 4096");
    }
}
