//! Integration tests for PgUserStore.
//!
//! These tests run against a real PostgreSQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use chrono::{Duration, Utc};
use common::TestDatabase;
use stratus_core::{NewUser, StratusError, UserChanges, UserId};
use stratus_repository::{PgUserStore, UserStore};

#[tokio::test]
async fn test_create_and_find_by_id() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool());

    let created = store
        .create(NewUser::new("testuser", "test@example.com"))
        .await
        .expect("Failed to create user");
    assert_eq!(created.username, "testuser");
    assert_eq!(created.email, "test@example.com");
    assert!(created.id.into_inner() > 0);

    let found = store
        .find_by_id(created.id)
        .await
        .expect("Failed to find user")
        .expect("User not found");

    assert_eq!(found, created);
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool());

    let result = store.find_by_id(UserId::new(424_242)).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_validation_error() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool());

    store
        .create(NewUser::new("dupe", "first@example.com"))
        .await
        .expect("Failed to create user");

    let result = store.create(NewUser::new("dupe", "second@example.com")).await;
    assert!(matches!(result, Err(StratusError::Validation(_))));

    let result = store.create(NewUser::new("other", "first@example.com")).await;
    assert!(matches!(result, Err(StratusError::Validation(_))));

    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_find_all_in_id_order() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool());

    for name in ["user1", "user2", "user3"] {
        store
            .create(NewUser::new(name, format!("{name}@example.com")))
            .await
            .expect("Failed to create user");
    }

    let users = store.find_all().await.expect("Query failed");
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["user1", "user2", "user3"]);
    assert!(users.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_partial_update() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool());

    let user = store
        .create(NewUser::new("before", "before@example.com"))
        .await
        .expect("Failed to create user");

    let updated = store
        .update(
            user.id,
            UserChanges {
                username: Some("after".to_string()),
                email: None,
            },
        )
        .await
        .expect("Update failed")
        .expect("User not found");

    assert_eq!(updated.username, "after");
    assert_eq!(updated.email, "before@example.com");
    assert_eq!(updated.created_at, user.created_at);
}

#[tokio::test]
async fn test_update_conflict_rolls_back() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool());

    store.create(NewUser::new("alice", "alice@example.com")).await.unwrap();
    let bob = store.create(NewUser::new("bob", "bob@example.com")).await.unwrap();

    let result = store
        .update(
            bob.id,
            UserChanges {
                username: Some("robert".to_string()),
                email: Some("alice@example.com".to_string()),
            },
        )
        .await;
    assert!(matches!(result, Err(StratusError::Validation(_))));

    let stored = store.find_by_id(bob.id).await.unwrap().unwrap();
    assert_eq!(stored.username, "bob");
}

#[tokio::test]
async fn test_update_missing_user() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool());

    let result = store
        .update(
            UserId::new(999),
            UserChanges {
                username: Some("ghost".to_string()),
                email: None,
            },
        )
        .await
        .expect("Update failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool());

    let user = store.create(NewUser::new("gone", "gone@example.com")).await.unwrap();

    let deleted = store.delete(user.id).await.expect("Delete failed");
    assert_eq!(deleted, Some(user.clone()));

    assert!(store.find_by_id(user.id).await.unwrap().is_none());
    assert!(store.delete(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_counts() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool());

    store.create(NewUser::new("one", "one@example.com")).await.unwrap();
    store.create(NewUser::new("two", "two@example.com")).await.unwrap();

    assert_eq!(store.count().await.unwrap(), 2);
    assert_eq!(
        store.count_created_since(Utc::now() - Duration::days(7)).await.unwrap(),
        2
    );
    assert_eq!(
        store.count_created_since(Utc::now() + Duration::days(1)).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_ping() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool());

    store.ping().await.expect("Ping failed");
}
