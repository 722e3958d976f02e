//! Shared fixtures for the router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use stratus_config::ServerConfig;
use stratus_core::{StratusError, StratusResult};
use stratus_repository::InMemoryUserStore;
use stratus_rest::{create_router_with_state, AppState};
use stratus_service::{CacheInterface, HealthServiceComponent, InMemoryCache, UserServiceComponent};
use tower::ServiceExt;

/// A cache that behaves as if Redis were down.
#[derive(Debug, Default)]
pub struct UnreachableCache;

#[async_trait]
impl CacheInterface for UnreachableCache {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, _key: &str) -> StratusResult<Option<String>> {
        Err(StratusError::cache("Connection refused"))
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> StratusResult<()> {
        Err(StratusError::cache("Connection refused"))
    }

    async fn delete(&self, _key: &str) -> StratusResult<bool> {
        Err(StratusError::cache("Connection refused"))
    }

    async fn ping(&self) -> StratusResult<()> {
        Err(StratusError::cache("Connection refused"))
    }
}

pub struct TestApp {
    pub store: Arc<InMemoryUserStore>,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_cache(Arc::new(InMemoryCache::new()))
    }

    pub fn with_cache(cache: Arc<dyn CacheInterface>) -> Self {
        let store = Arc::new(InMemoryUserStore::new());
        let state = AppState::new(
            Arc::new(UserServiceComponent::new(store.clone(), cache.clone())),
            Arc::new(HealthServiceComponent::new(store.clone(), cache, "backend")),
        );
        let router = create_router_with_state(state, &ServerConfig::default());
        Self { store, router }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send(self.router.clone(), method, uri, body).await
    }

    pub async fn create_user(&self, username: &str, email: &str) -> Value {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/users",
                Some(serde_json::json!({ "username": username, "email": email })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
        body["user"].clone()
    }
}

pub async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, json)
}
