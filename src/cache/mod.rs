//! Cache
//!
//! Este módulo contiene la capa de cache (cache-aside) sobre Redis.

pub mod cache_config;
pub mod cache_manager;
pub mod error;
pub mod keys;
pub mod memory_store;
pub mod redis_client;
pub mod store;

pub use cache_config::CacheConfig;
pub use cache_manager::{CacheLookup, CacheManager};
pub use error::CacheError;
pub use keys::{cache_key, sha1_hash};
pub use memory_store::MemoryStore;
pub use redis_client::RedisClient;
pub use store::CacheStore;
