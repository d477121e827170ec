//! Result type alias for engine operations.
//!
//! This module provides the `EngineResult` alias and the `SwallowExt`
//! extension used at component boundaries to degrade facility failures.

use super::engine::EngineError;

/// Type alias for Results using EngineError.
///
/// # Example
///
/// ```
/// use folio::error::{EngineError, EngineResult};
///
/// fn threshold(value: f32) -> EngineResult<f32> {
///     if value > 0.0 && value <= 1.0 {
///         Ok(value)
///     } else {
///         Err(EngineError::invalid_argument("threshold out of range"))
///     }
/// }
///
/// assert_eq!(threshold(0.1), Ok(0.1));
/// ```
pub type EngineResult<T> = Result<T, EngineError>;

/// Extension trait converting an error into a logged fallback value.
pub trait SwallowExt<T> {
    /// Return the success value, or log the error at `warn` and return
    /// `fallback`.
    fn swallow(self, operation: &str, fallback: T) -> T;
}

impl<T, E> SwallowExt<T> for Result<T, E>
where
    E: Into<EngineError>,
{
    fn swallow(self, operation: &str, fallback: T) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                let err: EngineError = err.into();
                tracing::warn!(
                    code = err.error_code(),
                    operation,
                    "{}; continuing with fallback",
                    err
                );
                fallback
            }
        }
    }
}
