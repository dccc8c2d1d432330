//! Modelo de User
//!
//! Este módulo contiene el struct User tal como lo sirve la API y se guarda
//! en el listado cacheado.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Crear usuario con un id UUID v4 nuevo
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
        }
    }

    /// Usuarios de demostración con los que arranca el servicio
    pub fn demo_users() -> Vec<User> {
        vec![
            User {
                id: "1".to_string(),
                name: "Tommy Vercetti".to_string(),
                email: "tommy@example.com".to_string(),
            },
            User {
                id: "2".to_string(),
                name: "CJ (Carl Johnson)".to_string(),
                email: "cj@example.com".to_string(),
            },
            User {
                id: "3".to_string(),
                name: "Niko Bellic".to_string(),
                email: "niko@example.com".to_string(),
            },
        ]
    }
}
