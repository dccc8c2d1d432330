use async_trait::async_trait;
use std::time::Duration;

use super::CacheError;

/// Operaciones de bajo nivel sobre el almacén clave-valor.
///
/// Las claves ya llegan derivadas; los valores son strings opacos.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// `Ok(None)` si la clave no existe o expiró
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Borrar una clave inexistente no es un error
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
