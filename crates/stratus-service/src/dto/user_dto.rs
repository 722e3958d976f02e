//! User-related DTOs.

use crate::cache::Cached;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stratus_core::{NewUser, User, UserChanges, UserId, EMAIL_MAX_LEN, USERNAME_MAX_LEN};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new user.
///
/// Missing fields deserialize as empty strings so they are reported by
/// validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = USERNAME_MAX_LEN, message = "Username is required (max 80 characters)"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, max = EMAIL_MAX_LEN, message = "Email is required (max 120 characters)"))]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
        }
    }
}

/// Request to change a user. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = USERNAME_MAX_LEN, message = "Username must be 1-80 characters"))]
    pub username: Option<String>,

    #[validate(length(min = 1, max = EMAIL_MAX_LEN, message = "Email must be 1-120 characters"))]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
        }
    }
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Every user, with whether the list came from the cache.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub from_cache: bool,
}

impl From<Cached<Vec<UserResponse>>> for UserListResponse {
    fn from(cached: Cached<Vec<UserResponse>>) -> Self {
        Self {
            from_cache: cached.is_from_cache(),
            users: cached.into_inner(),
        }
    }
}

/// A confirmation message with the affected user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserMessageResponse {
    pub message: String,
    pub user: UserResponse,
}

impl UserMessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>, user: UserResponse) -> Self {
        Self {
            message: message.into(),
            user,
        }
    }
}

/// A bare confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
