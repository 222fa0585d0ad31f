//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question text is required")]
    MissingQuestionText,

    #[error("Question type is required")]
    MissingQuestionType,

    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl DomainError {
    /// Check whether this error should block a save without any
    /// persistence call being issued.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::MissingQuestionText | DomainError::MissingQuestionType
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(DomainError::MissingQuestionText.is_validation());
        assert!(DomainError::MissingQuestionType.is_validation());
        assert!(!DomainError::IndexOutOfBounds { index: 3, len: 2 }.is_validation());
    }

    #[test]
    fn test_out_of_bounds_display() {
        let error = DomainError::IndexOutOfBounds { index: 5, len: 3 };
        assert_eq!(
            error.to_string(),
            "Index 5 out of bounds for list of length 3"
        );
    }
}
