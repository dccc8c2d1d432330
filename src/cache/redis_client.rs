use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use std::time::Duration;
use tracing::{debug, info};

use super::{CacheConfig, CacheError, CacheStore};

/// Cliente Redis con reconexión automática y operaciones async
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// Crear nuevo cliente Redis.
    ///
    /// Conecta y hace PING una sola vez; si falla, el error debe abortar el
    /// arranque del proceso.
    pub async fn new(config: &CacheConfig) -> Result<Self, CacheError> {
        info!("🔗 Conectando a Redis: {}", config.masked_url());

        let timeout = config.operation_timeout();
        let client = redis::Client::open(config.redis_url())?;

        let manager = tokio::time::timeout(timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| CacheError::Timeout(timeout))??;

        // Test de conexión
        let mut conn = manager.clone();
        let ping = redis::cmd("PING");
        let pong = tokio::time::timeout(timeout, ping.query_async::<_, String>(&mut conn))
            .await
            .map_err(|_| CacheError::Timeout(timeout))??;

        info!("✅ Redis conectado exitosamente: {}", pong);

        Ok(Self { manager })
    }
}

#[async_trait]
impl CacheStore for RedisClient {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.manager.clone();

        // EX 0 es rechazado por Redis
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds).await?;

        debug!("💾 Redis SET {} (TTL: {}s)", key, seconds);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.manager.clone();

        let removed: i64 = conn.del(key).await?;

        debug!("🗑️ Redis DEL {} (eliminados: {})", key, removed);
        Ok(())
    }
}
