//! Modelos de datos
//!
//! Este módulo contiene los modelos de dominio del sistema.

pub mod user;

pub use user::User;
