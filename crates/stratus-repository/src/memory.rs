//! In-memory user store.

use crate::traits::UserStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use stratus_core::{NewUser, StratusError, StratusResult, User, UserChanges, UserId};

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    users: BTreeMap<UserId, User>,
}

impl State {
    fn check_unique(&self, username: &str, email: &str, except: Option<UserId>) -> StratusResult<()> {
        for user in self.users.values().filter(|u| Some(u.id) != except) {
            if user.username == username {
                return Err(StratusError::validation(format!("Username '{username}' already exists")));
            }
            if user.email == email {
                return Err(StratusError::validation(format!("Email '{email}' already exists")));
            }
        }
        Ok(())
    }

    fn insert(&mut self, new_user: NewUser, created_at: DateTime<Utc>) -> StratusResult<User> {
        self.check_unique(&new_user.username, &new_user.email, None)?;

        self.last_id += 1;
        let user = User {
            id: UserId::new(self.last_id),
            username: new_user.username,
            email: new_user.email,
            created_at,
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// Process-local [`UserStore`].
///
/// Ids are assigned sequentially and never reused. Uniqueness of username
/// and email is enforced like the database constraints. The store can be
/// switched offline to exercise outage handling.
#[derive(Debug)]
pub struct InMemoryUserStore {
    state: Mutex<State>,
    available: AtomicBool,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Inserts a user with an explicit creation time.
    pub fn seed(&self, new_user: NewUser, created_at: DateTime<Utc>) -> StratusResult<User> {
        self.state.lock().insert(new_user, created_at)
    }

    /// Makes every subsequent call fail with a `Database` error, or recover.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> StratusResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StratusError::database("connection refused"))
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new_user: NewUser) -> StratusResult<User> {
        self.ensure_available()?;
        self.state.lock().insert(new_user, Utc::now())
    }

    async fn find_by_id(&self, id: UserId) -> StratusResult<Option<User>> {
        self.ensure_available()?;
        Ok(self.state.lock().users.get(&id).cloned())
    }

    async fn find_all(&self) -> StratusResult<Vec<User>> {
        self.ensure_available()?;
        Ok(self.state.lock().users.values().cloned().collect())
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> StratusResult<Option<User>> {
        self.ensure_available()?;
        let mut state = self.state.lock();

        let Some(current) = state.users.get(&id) else {
            return Ok(None);
        };
        let mut updated = current.clone();
        changes.apply_to(&mut updated);
        state.check_unique(&updated.username, &updated.email, Some(id))?;

        state.users.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: UserId) -> StratusResult<Option<User>> {
        self.ensure_available()?;
        Ok(self.state.lock().users.remove(&id))
    }

    async fn count(&self) -> StratusResult<u64> {
        self.ensure_available()?;
        Ok(self.state.lock().users.len() as u64)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> StratusResult<u64> {
        self.ensure_available()?;
        let count = self
            .state
            .lock()
            .users
            .values()
            .filter(|u| u.created_at >= since)
            .count();
        Ok(count as u64)
    }

    async fn ping(&self) -> StratusResult<()> {
        self.ensure_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let store = InMemoryUserStore::new();

        let created = store.create(NewUser::new("alice", "alice@example.com")).await.unwrap();
        assert_eq!(created.id, UserId::new(1));

        let found = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let store = InMemoryUserStore::new();
        assert!(store.find_by_id(UserId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_and_email() {
        let store = InMemoryUserStore::new();
        store.create(NewUser::new("alice", "alice@example.com")).await.unwrap();

        let dup_name = store.create(NewUser::new("alice", "other@example.com")).await;
        assert!(matches!(dup_name, Err(StratusError::Validation(_))));

        let dup_email = store.create(NewUser::new("bob", "alice@example.com")).await;
        assert!(matches!(dup_email, Err(StratusError::Validation(_))));

        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let store = InMemoryUserStore::new();
        let first = store.create(NewUser::new("a", "a@example.com")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(NewUser::new("b", "b@example.com")).await.unwrap();
        assert_eq!(second.id, UserId::new(2));
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let store = InMemoryUserStore::new();
        for name in ["c", "a", "b"] {
            store
                .create(NewUser::new(name, format!("{name}@example.com")))
                .await
                .unwrap();
        }

        let names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let store = InMemoryUserStore::new();
        let user = store.create(NewUser::new("alice", "alice@example.com")).await.unwrap();

        let updated = store
            .update(
                user.id,
                UserChanges {
                    username: None,
                    email: Some("alice@new.example.com".to_string()),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.username, "alice");
        assert_eq!(updated.email, "alice@new.example.com");
        assert_eq!(updated.created_at, user.created_at);
    }

    #[tokio::test]
    async fn test_update_conflict_leaves_row_untouched() {
        let store = InMemoryUserStore::new();
        store.create(NewUser::new("alice", "alice@example.com")).await.unwrap();
        let bob = store.create(NewUser::new("bob", "bob@example.com")).await.unwrap();

        let result = store
            .update(
                bob.id,
                UserChanges {
                    username: Some("bobby".to_string()),
                    email: Some("alice@example.com".to_string()),
                },
            )
            .await;
        assert!(matches!(result, Err(StratusError::Validation(_))));

        let stored = store.find_by_id(bob.id).await.unwrap().unwrap();
        assert_eq!(stored, bob);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let store = InMemoryUserStore::new();
        let result = store.update(UserId::new(5), UserChanges::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_row() {
        let store = InMemoryUserStore::new();
        let user = store.create(NewUser::new("alice", "alice@example.com")).await.unwrap();

        assert_eq!(store.delete(user.id).await.unwrap(), Some(user.clone()));
        assert!(store.delete(user.id).await.unwrap().is_none());
        assert!(store.find_by_id(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count_created_since() {
        let store = InMemoryUserStore::new();
        let now = Utc::now();
        store.seed(NewUser::new("old", "old@example.com"), now - Duration::days(10)).unwrap();
        store.seed(NewUser::new("recent", "recent@example.com"), now - Duration::days(2)).unwrap();
        store.create(NewUser::new("new", "new@example.com")).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 3);
        assert_eq!(store.count_created_since(now - Duration::days(7)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let store = InMemoryUserStore::new();
        store.set_available(false);

        assert!(matches!(store.ping().await, Err(StratusError::Database(_))));
        assert!(store.create(NewUser::new("a", "a@example.com")).await.is_err());

        store.set_available(true);
        assert!(store.ping().await.is_ok());
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
