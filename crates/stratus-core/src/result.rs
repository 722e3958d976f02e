//! Result type alias for Stratus operations.

use crate::StratusError;

/// Result type alias using `StratusError` as the error type.
pub type StratusResult<T> = Result<T, StratusError>;
