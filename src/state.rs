//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Se construye una sola vez al arrancar.

use std::time::Duration;

use crate::cache::CacheManager;
use crate::config::environment::EnvironmentConfig;
use crate::repositories::UserRepository;
use crate::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub cache: CacheManager,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, cache: CacheManager) -> Self {
        Self::with_repository(config, cache, UserRepository::with_demo_users())
    }

    pub fn with_repository(
        config: EnvironmentConfig,
        cache: CacheManager,
        repository: UserRepository,
    ) -> Self {
        let cache_ttl = Duration::from_secs(config.cache_ttl_secs);
        let user_service = UserService::new(repository, cache.clone(), cache_ttl);

        Self {
            config,
            cache,
            user_service,
        }
    }
}
