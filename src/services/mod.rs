//! Servicios de negocio
//!
//! Este módulo contiene la lógica de negocio que combina repositorios y cache.

pub mod user_service;

pub use user_service::UserService;
