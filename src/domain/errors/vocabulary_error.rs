//! Vocabulary source error types.

use thiserror::Error;

/// Vocabulary source error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum VocabularyError {
    #[error("vocabulary source unavailable: {message}")]
    SourceUnavailable { message: String },

    #[error("invalid vocabulary entry: {reason}")]
    InvalidEntry { reason: String },

    #[error("unexpected vocabulary error: {message}")]
    Unexpected { message: String },
}

impl VocabularyError {
    /// Creates a source unavailable error.
    #[must_use]
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
        }
    }

    /// Creates an invalid entry error.
    #[must_use]
    pub fn invalid_entry(reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            reason: reason.into(),
        }
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether retrying the fetch could succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = VocabularyError::invalid_entry("empty name");

        assert_eq!(error.to_string(), "invalid vocabulary entry: empty name");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(VocabularyError::source_unavailable("busy").is_recoverable());
        assert!(!VocabularyError::invalid_entry("empty name").is_recoverable());
        assert!(!VocabularyError::unexpected("boom").is_recoverable());
    }
}
