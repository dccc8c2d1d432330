//! Configuración de cache
//!
//! Este módulo contiene la configuración para el sistema de cache.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuración del cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// `host:port` del servidor Redis. Vacío = cache deshabilitado
    pub redis_host: String,
    pub redis_password: String,
    pub use_tls: bool,
    pub operation_timeout_secs: u64,
    pub default_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_host: String::new(),
            redis_password: String::new(),
            use_tls: true,
            operation_timeout_secs: 5,
            default_ttl: 600, // 10 minutos
        }
    }
}

impl CacheConfig {
    /// Sin host no hay cache: todas las operaciones pasan a ser no-ops
    pub fn is_enabled(&self) -> bool {
        !self.redis_host.trim().is_empty()
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    /// URL de conexión (`rediss://` salvo que TLS esté desactivado)
    pub fn redis_url(&self) -> String {
        self.build_url(&urlencoding::encode(&self.redis_password))
    }

    /// URL para logs, sin el password
    pub fn masked_url(&self) -> String {
        self.build_url("***")
    }

    fn build_url(&self, password: &str) -> String {
        let scheme = if self.use_tls { "rediss" } else { "redis" };
        let host = self.redis_host.trim();

        if self.redis_password.is_empty() {
            format!("{}://{}", scheme, host)
        } else {
            format!("{}://:{}@{}", scheme, password, host)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, password: &str, use_tls: bool) -> CacheConfig {
        CacheConfig {
            redis_host: host.to_string(),
            redis_password: password.to_string(),
            use_tls,
            ..CacheConfig::default()
        }
    }

    #[test]
    fn test_empty_host_disables_cache() {
        assert!(!config("", "secret", true).is_enabled());
        assert!(!config("   ", "", true).is_enabled());
        assert!(config("cache.internal:6380", "", true).is_enabled());
    }

    #[test]
    fn test_redis_url_uses_tls_scheme() {
        let url = config("cache.internal:6380", "", true).redis_url();
        assert_eq!(url, "rediss://cache.internal:6380");

        let url = config("localhost:6379", "", false).redis_url();
        assert_eq!(url, "redis://localhost:6379");
    }

    #[test]
    fn test_redis_url_encodes_password() {
        let url = config("cache.internal:6380", "p@ss:word", true).redis_url();
        assert_eq!(url, "rediss://:p%40ss%3Aword@cache.internal:6380");
    }

    #[test]
    fn test_masked_url_hides_password() {
        let masked = config("cache.internal:6380", "secret", true).masked_url();
        assert_eq!(masked, "rediss://:***@cache.internal:6380");
        assert!(!masked.contains("secret"));
    }

    #[test]
    fn test_durations() {
        let config = CacheConfig::default();
        assert_eq!(config.operation_timeout(), Duration::from_secs(5));
        assert_eq!(config.ttl(), Duration::from_secs(600));
    }
}
