//! Test doubles shared by the unit tests of this crate.

use crate::cache::CacheInterface;
use async_trait::async_trait;
use std::time::Duration;
use stratus_core::{StratusError, StratusResult};

/// A cache whose every operation fails as if Redis were unreachable.
#[derive(Debug, Default)]
pub struct FailingCache;

#[async_trait]
impl CacheInterface for FailingCache {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, _key: &str) -> StratusResult<Option<String>> {
        Err(StratusError::cache("connection refused"))
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> StratusResult<()> {
        Err(StratusError::cache("connection refused"))
    }

    async fn delete(&self, _key: &str) -> StratusResult<bool> {
        Err(StratusError::cache("connection refused"))
    }

    async fn ping(&self) -> StratusResult<()> {
        Err(StratusError::cache("connection refused"))
    }
}
