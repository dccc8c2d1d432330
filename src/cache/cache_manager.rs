//! Acceso cache-aside
//!
//! `CacheManager` envuelve un [`CacheStore`] opcional. Sin store (host vacío)
//! todas las operaciones son no-ops: `get` devuelve [`CacheLookup::Disabled`]
//! y `set`/`delete` devuelven `Ok(())` sin tocar nada.
//!
//! Ninguna operación reintenta: cada fallo vuelve al llamador, que decide.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::{cache_key, CacheConfig, CacheError, CacheStore, RedisClient};

const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Resultado de una lectura que no falló
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    Hit(String),
    /// Cache deshabilitado: tratar como MISS y calcular desde la fuente
    Disabled,
}

/// Handle compartido del cache. Clonar es barato (`Arc`).
#[derive(Clone)]
pub struct CacheManager {
    store: Option<Arc<dyn CacheStore>>,
    operation_timeout: Duration,
}

impl fmt::Debug for CacheManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheManager")
            .field("enabled", &self.is_enabled())
            .field("operation_timeout", &self.operation_timeout)
            .finish()
    }
}

impl CacheManager {
    pub fn disabled() -> Self {
        Self {
            store: None,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    pub fn with_store(store: Arc<dyn CacheStore>, operation_timeout: Duration) -> Self {
        Self {
            store: Some(store),
            operation_timeout,
        }
    }

    /// Construir el handle a partir de la configuración.
    ///
    /// Host vacío => cache deshabilitado. Con host, un fallo de conexión es
    /// un error fatal para el arranque.
    pub async fn connect(config: &CacheConfig) -> Result<Self, CacheError> {
        if !config.is_enabled() {
            warn!("⚠️ REDIS_HOST vacío: cache deshabilitado");
            return Ok(Self::disabled());
        }

        let client = RedisClient::new(config).await?;
        Ok(Self::with_store(Arc::new(client), config.operation_timeout()))
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Leer la entrada `(prefix, content_key)`.
    ///
    /// Un MISS se devuelve como `Err(CacheError::Miss)`.
    pub async fn get(&self, prefix: &str, content_key: &str) -> Result<CacheLookup, CacheError> {
        let Some(store) = &self.store else {
            debug!("Cache deshabilitado, GET {}:{} ignorado", prefix, content_key);
            return Ok(CacheLookup::Disabled);
        };

        let key = cache_key(prefix, content_key);

        match self.bounded(store.get(&key)).await {
            Ok(Some(value)) => {
                debug!("📥 Cache HIT para clave: {}", key);
                Ok(CacheLookup::Hit(value))
            }
            Ok(None) => {
                debug!("❌ Cache MISS para clave: {}", key);
                Err(CacheError::Miss(key))
            }
            Err(e) => {
                warn!("⚠️ Error leyendo cache para clave {}: {}", key, e);
                Err(e)
            }
        }
    }

    pub async fn set(
        &self,
        prefix: &str,
        content_key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let Some(store) = &self.store else {
            warn!("⚠️ Cache deshabilitado (sin cliente Redis), SET ignorado");
            return Ok(());
        };

        let key = cache_key(prefix, content_key);

        match self.bounded(store.set_ex(&key, value, ttl)).await {
            Ok(()) => {
                debug!("💾 Cache SET para clave: {} (TTL: {:?})", key, ttl);
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ Error guardando en cache para clave {}: {}", key, e);
                Err(e)
            }
        }
    }

    pub async fn delete(&self, prefix: &str, content_key: &str) -> Result<(), CacheError> {
        let Some(store) = &self.store else {
            warn!("⚠️ Cache deshabilitado (sin cliente Redis), DELETE ignorado");
            return Ok(());
        };

        let key = cache_key(prefix, content_key);

        match self.bounded(store.delete(&key)).await {
            Ok(()) => {
                debug!("🗑️ Cache DELETE para clave: {}", key);
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ Error eliminando cache para clave {}: {}", key, e);
                Err(e)
            }
        }
    }

    async fn bounded<T>(
        &self,
        operation: impl Future<Output = Result<T, CacheError>>,
    ) -> Result<T, CacheError> {
        tokio::time::timeout(self.operation_timeout, operation)
            .await
            .map_err(|_| CacheError::Timeout(self.operation_timeout))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;
    use async_trait::async_trait;

    const PREFIX: &str = "getusers";
    const CONTENT_KEY: &str = "someUniqueIdentifiersLikeSQLQUERY";

    fn memory_manager() -> (CacheManager, MemoryStore) {
        let store = MemoryStore::new();
        let manager = CacheManager::with_store(Arc::new(store.clone()), Duration::from_secs(1));
        (manager, store)
    }

    struct BrokenStore;

    #[async_trait]
    impl CacheStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::Store("connection reset".to_string()))
        }

        async fn set_ex(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
            Err(CacheError::Store("connection reset".to_string()))
        }

        async fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::Store("connection reset".to_string()))
        }
    }

    struct SlowStore;

    #[async_trait]
    impl CacheStore for SlowStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(None)
        }

        async fn set_ex(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        }

        async fn delete(&self, _key: &str) -> Result<(), CacheError> {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_disabled_manager_is_pass_through() {
        let cache = CacheManager::disabled();
        assert!(!cache.is_enabled());

        let lookup = cache.get(PREFIX, CONTENT_KEY).await.unwrap();
        assert_eq!(lookup, CacheLookup::Disabled);

        cache.set(PREFIX, CONTENT_KEY, "[]", Duration::from_secs(60)).await.unwrap();
        cache.delete(PREFIX, CONTENT_KEY).await.unwrap();

        // Set no dejó nada detrás
        assert_eq!(cache.get(PREFIX, CONTENT_KEY).await.unwrap(), CacheLookup::Disabled);
    }

    #[tokio::test]
    async fn test_connect_with_empty_host_is_disabled() {
        let config = CacheConfig::default();
        let cache = CacheManager::connect(&config).await.unwrap();
        assert!(!cache.is_enabled());
    }

    #[tokio::test]
    async fn test_connect_to_unreachable_host_fails() {
        // Puerto 1: nada escucha, la conexión se rechaza o agota el timeout
        let config = CacheConfig {
            redis_host: "127.0.0.1:1".to_string(),
            use_tls: false,
            operation_timeout_secs: 1,
            ..CacheConfig::default()
        };

        let result = CacheManager::connect(&config).await;
        assert!(matches!(result, Err(CacheError::Timeout(_)) | Err(CacheError::Redis(_))));
    }

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let (cache, store) = memory_manager();

        cache
            .set(PREFIX, CONTENT_KEY, r#"[{"id":"1"}]"#, Duration::from_secs(600))
            .await
            .unwrap();

        let lookup = cache.get(PREFIX, CONTENT_KEY).await.unwrap();
        assert_eq!(lookup, CacheLookup::Hit(r#"[{"id":"1"}]"#.to_string()));

        // Guardado bajo la clave derivada
        let raw = store.get(&cache_key(PREFIX, CONTENT_KEY)).await.unwrap();
        assert_eq!(raw.as_deref(), Some(r#"[{"id":"1"}]"#));
    }

    #[tokio::test]
    async fn test_get_of_missing_entry_is_miss() {
        let (cache, _store) = memory_manager();

        let err = cache.get(PREFIX, CONTENT_KEY).await.unwrap_err();
        assert!(err.is_miss());
        assert!(matches!(err, CacheError::Miss(key) if key == cache_key(PREFIX, CONTENT_KEY)));
    }

    #[tokio::test]
    async fn test_delete_invalidates_entry() {
        let (cache, _store) = memory_manager();

        cache.set(PREFIX, CONTENT_KEY, "v", Duration::from_secs(600)).await.unwrap();
        cache.delete(PREFIX, CONTENT_KEY).await.unwrap();

        assert!(cache.get(PREFIX, CONTENT_KEY).await.unwrap_err().is_miss());
    }

    #[tokio::test]
    async fn test_delete_of_missing_entry_is_ok() {
        let (cache, _store) = memory_manager();
        assert!(cache.delete(PREFIX, "never-written").await.is_ok());
    }

    #[tokio::test]
    async fn test_entries_are_namespaced_by_prefix() {
        let (cache, _store) = memory_manager();

        cache.set("getusers", CONTENT_KEY, "users", Duration::from_secs(600)).await.unwrap();

        assert!(cache.get("getorders", CONTENT_KEY).await.unwrap_err().is_miss());
    }

    #[tokio::test]
    async fn test_store_errors_are_returned_to_caller() {
        let cache = CacheManager::with_store(Arc::new(BrokenStore), Duration::from_secs(1));

        assert!(matches!(cache.get(PREFIX, CONTENT_KEY).await, Err(CacheError::Store(_))));
        assert!(cache.set(PREFIX, CONTENT_KEY, "v", Duration::from_secs(1)).await.is_err());
        assert!(cache.delete(PREFIX, CONTENT_KEY).await.is_err());
    }

    #[tokio::test]
    async fn test_slow_store_times_out() {
        let timeout = Duration::from_millis(50);
        let cache = CacheManager::with_store(Arc::new(SlowStore), timeout);

        let err = cache.get(PREFIX, CONTENT_KEY).await.unwrap_err();
        assert!(matches!(err, CacheError::Timeout(t) if t == timeout));

        let err = cache.set(PREFIX, CONTENT_KEY, "v", Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, CacheError::Timeout(_)));
    }
}
