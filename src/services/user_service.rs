//! Servicio de usuarios
//!
//! Lecturas con cache-aside sobre el listado completo; las escrituras
//! invalidan la entrada en lugar de actualizarla, a costa de un MISS
//! garantizado después de cada cambio.

use std::time::Duration;
use tracing::{debug, error, info, warn};
use validator::Validate;

use crate::cache::{CacheLookup, CacheManager};
use crate::dto::user_dto::CreateUserRequest;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Prefijo de la entrada del listado completo
pub const USERS_CACHE_PREFIX: &str = "getusers";
/// Identificador del contenido cacheado (haría las veces de la query SQL)
pub const USERS_CACHE_CONTENT_KEY: &str = "someUniqueIdentifiersLikeSQLQUERY";

#[derive(Clone)]
pub struct UserService {
    repository: UserRepository,
    cache: CacheManager,
    cache_ttl: Duration,
}

impl UserService {
    pub fn new(repository: UserRepository, cache: CacheManager, cache_ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            cache_ttl,
        }
    }

    /// Listado completo: cache primero, repositorio como respaldo.
    ///
    /// Ningún fallo del cache llega al llamador.
    pub async fn list_users(&self) -> Vec<User> {
        match self.cache.get(USERS_CACHE_PREFIX, USERS_CACHE_CONTENT_KEY).await {
            Ok(CacheLookup::Hit(payload)) => match serde_json::from_str::<Vec<User>>(&payload) {
                Ok(users) => {
                    info!("✅ {} usuarios servidos desde cache", users.len());
                    return users;
                }
                Err(e) => warn!("⚠️ Listado cacheado ilegible, recalculando: {}", e),
            },
            Ok(CacheLookup::Disabled) => debug!("Cache deshabilitado, leyendo repositorio"),
            Err(e) if e.is_miss() => debug!("Listado no cacheado, leyendo repositorio"),
            Err(e) => warn!("⚠️ Cache no disponible, leyendo repositorio: {}", e),
        }

        let users = self.repository.find_all().await;

        match serde_json::to_string(&users) {
            Ok(payload) => {
                if let Err(e) = self
                    .cache
                    .set(USERS_CACHE_PREFIX, USERS_CACHE_CONTENT_KEY, &payload, self.cache_ttl)
                    .await
                {
                    error!("❌ Error setting cache: {}", e);
                }
            }
            Err(e) => error!("❌ Error serializando usuarios para el cache: {}", e),
        }

        users
    }

    /// Listado directo del repositorio, sin tocar el cache
    pub async fn list_users_uncached(&self) -> Vec<User> {
        self.repository.find_all().await
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        request.validate().map_err(AppError::Validation)?;

        let user = User::new(request.name, request.email);
        self.repository.insert(user.clone()).await;
        self.invalidate_listing().await;

        Ok(user)
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<User> {
        let removed = self
            .repository
            .delete(id)
            .await
            .ok_or_else(|| not_found_error("User", id))?;

        self.invalidate_listing().await;
        Ok(removed)
    }

    /// Igual que `delete_user` pero dejando el listado cacheado intacto:
    /// hasta que expire, `list_users` sigue mostrando al usuario borrado.
    pub async fn delete_user_keeping_cache(&self, id: &str) -> AppResult<User> {
        self.repository
            .delete(id)
            .await
            .ok_or_else(|| not_found_error("User", id))
    }

    async fn invalidate_listing(&self) {
        if let Err(e) = self
            .cache
            .delete(USERS_CACHE_PREFIX, USERS_CACHE_CONTENT_KEY)
            .await
        {
            error!("❌ Error invalidando el listado cacheado: {}", e);
        }
    }
}
