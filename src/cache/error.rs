//! Errores del cache
//!
//! Todos son recuperables: quien llama los trata como un MISS y sigue
//! con la fuente de verdad.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache miss for key '{0}'")]
    Miss(String),

    #[error("Cache operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Cache store error: {0}")]
    Store(String),
}

impl CacheError {
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::Miss(_))
    }
}
