//! Error handling for the folio interaction engine.
//!
//! The engine has no fatal failure mode. Every failure is classified into one
//! of three kinds and, except for [`EngineError::InvalidArgument`], converted
//! to a safe default at the component boundary:
//!
//! | Kind | Raised by | Boundary behaviour |
//! |------|-----------|--------------------|
//! | InvalidArgument | typewriter interval, reveal threshold | returned to caller |
//! | PersistenceUnavailable | theme store reads/writes | logged, in-memory only |
//! | ObservationUnavailable | viewport observation | logged, element revealed |
//!
//! # Example
//!
//! ```
//! use folio::error::{EngineError, EngineResult};
//!
//! fn interval(ms: u64) -> EngineResult<u64> {
//!     if ms == 0 {
//!         return Err(EngineError::invalid_argument("tick interval must be positive"));
//!     }
//!     Ok(ms)
//! }
//!
//! assert!(interval(0).is_err());
//! ```

mod engine;
mod result;

pub use engine::EngineError;
pub use result::{EngineResult, SwallowExt};
