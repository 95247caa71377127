//! Error types for seqfilter

use thiserror::Error;

/// Main error type for seqfilter operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// An argument failed validation (zero-sized element, malformed buffer, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A bounded container refused another element
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// Element size disagreement between a buffer and the data handed to it
    #[error("Layout mismatch: expected element size {expected}, got {actual}")]
    LayoutMismatch { expected: usize, actual: usize },

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FilterError {
    /// Stable nonzero code for hosts that report errors numerically.
    ///
    /// Zero is reserved for "no error" so a cleared builder can report 0.
    pub fn code(&self) -> u32 {
        match self {
            FilterError::InvalidArgument(_) => 1,
            FilterError::CapacityExceeded(_) => 2,
            FilterError::LayoutMismatch { .. } => 3,
            FilterError::Internal(_) => 4,
        }
    }
}

/// Result type alias for seqfilter operations
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_nonzero() {
        let errors = [
            FilterError::InvalidArgument("x".into()),
            FilterError::CapacityExceeded("x".into()),
            FilterError::LayoutMismatch {
                expected: 4,
                actual: 8,
            },
            FilterError::Internal("x".into()),
        ];
        for e in &errors {
            assert_ne!(e.code(), 0);
        }
    }

    #[test]
    fn test_error_display() {
        let e = FilterError::LayoutMismatch {
            expected: 4,
            actual: 8,
        };
        assert_eq!(
            e.to_string(),
            "Layout mismatch: expected element size 4, got 8"
        );
    }
}
