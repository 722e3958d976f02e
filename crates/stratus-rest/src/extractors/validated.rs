//! Validated JSON extractor.
//!
//! Deserializes the body and runs `validator` rules on it. Both a malformed
//! body and a failed rule are answered with 400 `VALIDATION_ERROR`.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use stratus_core::{validation_errors_to_stratus_error, StratusError};
use validator::Validate;

/// JSON extractor that validates the deserialized value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn rejection_to_error(rejection: &JsonRejection) -> StratusError {
    StratusError::Validation(format!("Invalid JSON: {}", rejection.body_text()))
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Service(rejection_to_error(&rejection)))?;

        value
            .validate()
            .map_err(|errors| AppError::Service(validation_errors_to_stratus_error(errors)))?;

        Ok(ValidatedJson(value))
    }
}
