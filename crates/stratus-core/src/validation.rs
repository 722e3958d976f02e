//! Validation utilities.

use crate::StratusError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `StratusError` on failure.
    fn validate_request(&self) -> Result<(), StratusError> {
        self.validate().map_err(validation_errors_to_stratus_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `StratusError`.
///
/// Field errors are reported as `field: message`, sorted by field name and
/// joined with `; `.
#[must_use]
pub fn validation_errors_to_stratus_error(errors: ValidationErrors) -> StratusError {
    let mut field_errors: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                (
                    (*field).to_string(),
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string),
                )
            })
        })
        .collect();
    field_errors.sort();

    let message = field_errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ");

    StratusError::Validation(message)
}
