//! Engine error taxonomy.

use thiserror::Error;

use crate::traits::{ObservationError, StorageError};

/// Errors produced by the interaction state engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A call was made with an argument outside its contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The key-value persistence facility failed or is blocked.
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// The intersection observation facility is missing.
    #[error("viewport observation unavailable: {0}")]
    ObservationUnavailable(String),
}

impl EngineError {
    /// Shorthand for [`EngineError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        EngineError::InvalidArgument(message.into())
    }

    /// Whether this error is allowed to reach the caller.
    ///
    /// Only contract violations are; facility failures degrade silently.
    pub fn is_caller_facing(&self) -> bool {
        matches!(self, EngineError::InvalidArgument(_))
    }

    /// Short stable code used in log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::InvalidArgument(_) => "ENGINE_INVALID_ARGUMENT",
            EngineError::PersistenceUnavailable(_) => "ENGINE_PERSISTENCE_UNAVAILABLE",
            EngineError::ObservationUnavailable(_) => "ENGINE_OBSERVATION_UNAVAILABLE",
        }
    }
}

impl From<StorageError> for EngineError {
    fn from(err: StorageError) -> Self {
        EngineError::PersistenceUnavailable(err.to_string())
    }
}

impl From<ObservationError> for EngineError {
    fn from(err: ObservationError) -> Self {
        EngineError::ObservationUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = EngineError::invalid_argument("tick interval must be positive");
        assert_eq!(
            err.to_string(),
            "invalid argument: tick interval must be positive"
        );
        assert!(err.is_caller_facing());
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            EngineError::InvalidArgument(String::new()).error_code(),
            EngineError::PersistenceUnavailable(String::new()).error_code(),
            EngineError::ObservationUnavailable(String::new()).error_code(),
        ];
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }
}
