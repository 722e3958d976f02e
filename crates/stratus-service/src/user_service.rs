//! User service trait definition.

use crate::cache::Cached;
use crate::dto::{CreateUserRequest, StatsResponse, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use stratus_core::{Interface, StratusResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Creates a new user and invalidates the cached user list.
    async fn create_user(&self, request: CreateUserRequest) -> StratusResult<UserResponse>;

    /// Gets a user by ID, always from the store.
    async fn get_user(&self, id: UserId) -> StratusResult<UserResponse>;

    /// Lists every user through the cache.
    async fn list_users(&self) -> StratusResult<Cached<Vec<UserResponse>>>;

    /// Updates a user and invalidates the cached user list.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> StratusResult<UserResponse>;

    /// Deletes a user, returning it, and invalidates the cached user list.
    async fn delete_user(&self, id: UserId) -> StratusResult<UserResponse>;

    /// Returns aggregate statistics through the cache.
    async fn get_stats(&self) -> StratusResult<StatsResponse>;
}
