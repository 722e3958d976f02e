//! User management controller.

use crate::{
    extractors::{UserIdPath, ValidatedJson},
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use stratus_core::ErrorResponse;
use stratus_service::{
    CreateUserRequest, MessageResponse, UpdateUserRequest, UserListResponse, UserMessageResponse,
    UserResponse,
};
use tracing::debug;

pub const USER_CREATED: &str = "User created successfully";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_DELETED: &str = "User deleted successfully";

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = UserListResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<UserListResponse> {
    debug!("List users request");

    let users = state.user_service.list_users().await?;
    ok(UserListResponse::from(users))
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserMessageResponse),
        (status = 400, description = "Missing or invalid fields, or duplicate", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserMessageResponse>), AppError> {
    debug!("Create user request: {}", request.username);

    let user = state.user_service.create_user(request).await?;
    Ok(created(UserMessageResponse::new(USER_CREATED, user)))
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    )
)]
pub async fn get_user(State(state): State<AppState>, UserIdPath(id): UserIdPath) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", id);

    ok(state.user_service.get_user(id).await?)
}

/// Update some fields of a user.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserMessageResponse),
        (status = 400, description = "No fields, invalid fields, or duplicate", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<UserMessageResponse> {
    debug!("Update user request: {}", id);

    let user = state.user_service.update_user(id, request).await?;
    ok(UserMessageResponse::new(USER_UPDATED, user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    )
)]
pub async fn delete_user(State(state): State<AppState>, UserIdPath(id): UserIdPath) -> ApiResult<MessageResponse> {
    debug!("Delete user request: {}", id);

    state.user_service.delete_user(id).await?;
    ok(MessageResponse::new(USER_DELETED))
}
