//! Path extractor for user ids.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use stratus_core::UserId;

/// The `{id}` path segment as a [`UserId`].
///
/// A segment that is not an integer does not identify any resource, so it is
/// answered like an unmatched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::RouteNotFound)?;

        UserId::parse(&raw).map(Self).map_err(|_| AppError::RouteNotFound)
    }
}
