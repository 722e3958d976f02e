//! Router tests for the user endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_create_and_get_user() {
    let app = TestApp::new();

    let (status, body) = app
        .request(
            Method::POST,
            "/api/users",
            Some(json!({ "username": "alice", "email": "alice@example.com" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
    let id = body["user"]["id"].as_i64().unwrap();
    assert!(body["user"]["created_at"].is_string());

    let (status, user) = app.request(Method::GET, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["id"], id);
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "alice@example.com");
}

#[tokio::test]
async fn test_create_missing_email_is_400() {
    let app = TestApp::new();

    let (status, body) = app
        .request(Method::POST, "/api/users", Some(json!({ "username": "alice" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_create_malformed_json_is_400() {
    let app = TestApp::new();

    let response = common::send(
        app.router.clone(),
        Method::POST,
        "/api/users",
        Some(json!("not an object")),
    )
    .await;

    assert_eq!(response.0, StatusCode::BAD_REQUEST);
    assert_eq!(response.1["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_duplicate_is_400() {
    let app = TestApp::new();
    app.create_user("alice", "alice@example.com").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/users",
            Some(json!({ "username": "alice", "email": "other@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("alice"));
}

#[tokio::test]
async fn test_list_users_reports_cache_origin() {
    let app = TestApp::new();
    app.create_user("alice", "alice@example.com").await;

    let (status, first) = app.request(Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["from_cache"], false);
    assert_eq!(first["users"].as_array().unwrap().len(), 1);

    let (_, second) = app.request(Method::GET, "/api/users", None).await;
    assert_eq!(second["from_cache"], true);
    assert_eq!(second["users"], first["users"]);

    app.create_user("bob", "bob@example.com").await;
    let (_, third) = app.request(Method::GET, "/api/users", None).await;
    assert_eq!(third["from_cache"], false);
    assert_eq!(third["users"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_user() {
    let app = TestApp::new();
    let user = app.create_user("alice", "alice@example.com").await;
    let uri = format!("/api/users/{}", user["id"]);

    let (status, body) = app
        .request(Method::PUT, &uri, Some(json!({ "email": "alice@new.example.com" })))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated successfully");
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@new.example.com");
}

#[tokio::test]
async fn test_update_with_empty_body_is_400() {
    let app = TestApp::new();
    let user = app.create_user("alice", "alice@example.com").await;

    let (status, body) = app
        .request(Method::PUT, &format!("/api/users/{}", user["id"]), Some(json!({})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_missing_user_is_404() {
    let app = TestApp::new();

    let (status, body) = app
        .request(Method::PUT, "/api/users/999", Some(json!({ "username": "ghost" })))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::new();
    let user = app.create_user("alice", "alice@example.com").await;
    let uri = format!("/api/users/{}", user["id"]);

    let (status, body) = app.request(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User deleted successfully" }));

    let (status, _) = app.request(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.request(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_integer_id_is_unmatched_route() {
    let app = TestApp::new();

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let body = (method == Method::PUT).then(|| json!({ "username": "x" }));
        let (status, body) = app.request(method, "/api/users/abc", body).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let app = TestApp::new();
    app.store.set_available(false);

    let (status, body) = app.request(Method::GET, "/api/users", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "DATABASE_ERROR");
    assert!(body["error"].is_string());
}
