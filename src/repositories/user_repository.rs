//! Repositorio de usuarios
//!
//! Fuente de verdad del listado: una lista en memoria protegida por un
//! `RwLock`, compartida entre todos los handlers.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::User;

#[derive(Clone, Default)]
pub struct UserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    pub fn with_demo_users() -> Self {
        Self::new(User::demo_users())
    }

    /// Copia del listado completo, en orden de inserción
    pub async fn find_all(&self) -> Vec<User> {
        let users = self.users.read().await;
        log::debug!("📋 Listando {} usuarios desde el repositorio", users.len());
        users.clone()
    }

    pub async fn insert(&self, user: User) {
        let mut users = self.users.write().await;
        log::info!("💾 Usuario '{}' agregado (id: {})", user.name, user.id);
        users.push(user);
    }

    /// Eliminar por id, devolviendo el usuario eliminado si existía
    pub async fn delete(&self, id: &str) -> Option<User> {
        let mut users = self.users.write().await;

        let position = users.iter().position(|user| user.id == id)?;
        let removed = users.remove(position);

        log::info!("🗑️ Usuario '{}' eliminado (id: {})", removed.name, removed.id);
        Some(removed)
    }
}
