//! Store trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stratus_core::{Interface, NewUser, StratusResult, User, UserChanges, UserId};

/// Durable storage for users.
///
/// Every mutation is atomic: on error nothing is persisted.
#[async_trait]
pub trait UserStore: Interface + Send + Sync {
    /// Inserts a user. Duplicate usernames or emails fail with `Validation`.
    async fn create(&self, new_user: NewUser) -> StratusResult<User>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> StratusResult<Option<User>>;

    /// Returns every user ordered by id.
    async fn find_all(&self) -> StratusResult<Vec<User>>;

    /// Applies a partial update. Returns `None` when the user does not exist.
    async fn update(&self, id: UserId, changes: UserChanges) -> StratusResult<Option<User>>;

    /// Deletes a user, returning the removed row.
    async fn delete(&self, id: UserId) -> StratusResult<Option<User>>;

    /// Counts all users.
    async fn count(&self) -> StratusResult<u64>;

    /// Counts users created at or after `since`.
    async fn count_created_since(&self, since: DateTime<Utc>) -> StratusResult<u64>;

    /// Liveness probe.
    async fn ping(&self) -> StratusResult<()>;
}
