//! Redis-backed pass-through response cache.
//!
//! Stores serialized response payloads under keys derived from the request
//! shape, with a bounded TTL. There is no read path here: handlers write
//! after building a response and downstream consumers (edge workers, the
//! mobile BFF) read the keys directly. Writes are fire-and-forget from the
//! caller's point of view; a dead Redis only costs caching, never requests.

use bb8_redis::redis::AsyncCommands;
use bb8_redis::{bb8, redis, RedisConnectionManager};
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::core::config::CacheConfig;
use crate::shared::constants::CACHE_KEY_NAMESPACE;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis pool error: {0}")]
    Pool(#[from] bb8::RunError<redis::RedisError>),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct ResponseCache {
    pool: bb8::Pool<RedisConnectionManager>,
    ttl_secs: u64,
}

impl ResponseCache {
    /// Create a cache over a lazily-connecting Redis pool.
    ///
    /// No connection is made here; the first `store` call establishes one.
    pub fn new(config: &CacheConfig) -> Result<Self, CacheError> {
        let manager = RedisConnectionManager::new(config.redis_url.as_str())?;
        let pool = bb8::Pool::builder()
            .max_size(config.max_pool_size)
            .build_unchecked(manager);

        Ok(Self {
            pool,
            ttl_secs: config.response_ttl_secs,
        })
    }

    /// Cache key for a response payload, derived from the request shape.
    ///
    /// Hashing keeps keys bounded regardless of query-string length; the
    /// namespace prefix makes a format change invalidate old entries.
    pub fn request_key(method: &axum::http::Method, uri: &axum::http::Uri) -> String {
        let digest = Sha256::digest(format!("{} {}", method, uri).as_bytes());
        format!("{}:{}", CACHE_KEY_NAMESPACE, hex::encode(digest))
    }

    /// Store a payload under `key` with the configured TTL.
    pub async fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let payload = serde_json::to_string(value)?;
        let mut conn = self.pool.get().await?;
        let _: () = conn.set_ex(key, payload, self.ttl_secs).await?;

        tracing::debug!("Cached response payload under {}", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, Uri};

    #[test]
    fn request_key_is_deterministic() {
        let uri: Uri = "/api/locations/countries".parse().unwrap();
        let a = ResponseCache::request_key(&Method::GET, &uri);
        let b = ResponseCache::request_key(&Method::GET, &uri);
        assert_eq!(a, b);
    }

    #[test]
    fn request_key_is_namespaced() {
        let uri: Uri = "/api/locations/countries".parse().unwrap();
        let key = ResponseCache::request_key(&Method::GET, &uri);
        assert!(key.starts_with("response:v1:"));
    }

    #[test]
    fn distinct_requests_get_distinct_keys() {
        let a: Uri = "/api/locations/countries".parse().unwrap();
        let b: Uri = "/api/locations/countries?page=2".parse().unwrap();
        assert_ne!(
            ResponseCache::request_key(&Method::GET, &a),
            ResponseCache::request_key(&Method::GET, &b)
        );
    }
}
