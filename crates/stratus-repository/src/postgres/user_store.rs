//! PostgreSQL user store implementation.

use crate::{traits::UserStore, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use stratus_core::{NewUser, StratusError, StratusResult, User, UserChanges, UserId};
use tracing::debug;

/// PostgreSQL user store implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserStore)]
pub struct PgUserStore {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgUserStore {
    /// Creates a new PostgreSQL user store.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            username: row.username,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new_user: NewUser) -> StratusResult<User> {
        debug!("Inserting user: {}", new_user.username);

        let mut tx = self.pool.inner().begin().await?;
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING id, username, email, created_at
            ",
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: UserId) -> StratusResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, username, email, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> StratusResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, username, email, created_at
            FROM users
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> StratusResult<Option<User>> {
        debug!("Updating user: {}", id);

        let mut tx = self.pool.inner().begin().await?;
        let row = sqlx::query_as::<_, UserRow>(
            r"
            UPDATE users
            SET username = COALESCE($2, username),
                email = COALESCE($3, email)
            WHERE id = $1
            RETURNING id, username, email, created_at
            ",
        )
        .bind(id.into_inner())
        .bind(changes.username)
        .bind(changes.email)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, id: UserId) -> StratusResult<Option<User>> {
        debug!("Deleting user: {}", id);

        let mut tx = self.pool.inner().begin().await?;
        let row = sqlx::query_as::<_, UserRow>(
            r"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, username, email, created_at
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(row.map(User::from))
    }

    async fn count(&self) -> StratusResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner())
            .await?;

        row_count(count)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> StratusResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE created_at >= $1")
            .bind(since)
            .fetch_one(self.pool.inner())
            .await?;

        row_count(count)
    }

    async fn ping(&self) -> StratusResult<()> {
        self.pool.health_check().await
    }
}

/// Converts a `COUNT(*)` result, which Postgres returns as `BIGINT`.
fn row_count(count: i64) -> StratusResult<u64> {
    u64::try_from(count).map_err(|_| StratusError::internal(format!("Negative row count: {count}")))
}

impl std::fmt::Debug for PgUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgUserStore").finish_non_exhaustive()
    }
}
