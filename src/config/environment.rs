//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen un valor por defecto; un valor presente pero
//! inválido es un error de configuración.

use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::cache::CacheConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a valid positive number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be true or false, got '{value}'")]
    InvalidBool { name: &'static str, value: String },

    #[error("{name} must be a valid log level, got '{value}'")]
    InvalidLogLevel { name: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    // Redis
    pub redis_host: String,
    pub redis_password: String,
    pub redis_tls: bool,
    pub redis_timeout_secs: u64,
    pub cache_ttl_secs: u64,
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Leer la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_number("PORT", var("PORT"), 3000)?,
            cors_origins: var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: match var("LOG_LEVEL") {
                Some(value) => tracing::Level::from_str(&value)
                    .map_err(|_| ConfigError::InvalidLogLevel { name: "LOG_LEVEL", value })?,
                None => tracing::Level::DEBUG,
            },
            redis_host: var("REDIS_HOST").unwrap_or_default(),
            // El password puede contener espacios significativos
            redis_password: lookup("REDIS_PASSWORD").unwrap_or_default(),
            redis_tls: parse_bool("REDIS_TLS", var("REDIS_TLS"), true)?,
            redis_timeout_secs: parse_seconds("REDIS_TIMEOUT_SECS", var("REDIS_TIMEOUT_SECS"), 5)?,
            cache_ttl_secs: parse_seconds("CACHE_TTL_SECS", var("CACHE_TTL_SECS"), 600)?,
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            redis_host: self.redis_host.clone(),
            redis_password: self.redis_password.clone(),
            use_tls: self.redis_tls,
            operation_timeout_secs: self.redis_timeout_secs,
            default_ttl: self.cache_ttl_secs,
        }
    }
}

fn parse_number<T: FromStr>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

/// Duraciones en segundos: 0 no es válido (timeout inmediato o entrada que nace expirada)
fn parse_seconds(name: &'static str, value: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match parse_number(name, value, default)? {
        0 => Err(ConfigError::InvalidNumber {
            name,
            value: "0".to_string(),
        }),
        seconds => Ok(seconds),
    }
}

fn parse_bool(name: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("true" | "1" | "yes") => Ok(true),
        Some("false" | "0" | "no") => Ok(false),
        Some(_) => Err(ConfigError::InvalidBool {
            name,
            value: value.unwrap_or_default(),
        }),
    }
}
