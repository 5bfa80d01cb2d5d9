//! Runtime configuration for the allocation service.
//!
//! Values come from the environment:
//!
//! - `ALLOCATION_DATABASE_URL`: SQLite URL, created on first start
//! - `ALLOCATION_BIND_ADDR`: socket address to listen on
//! - `ALLOCATION_CORS_ORIGIN`: the one origin browsers may call from; any origin when unset

use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

pub const DATABASE_URL_VAR: &str = "ALLOCATION_DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "ALLOCATION_BIND_ADDR";
pub const CORS_ORIGIN_VAR: &str = "ALLOCATION_CORS_ORIGIN";

const DEFAULT_DATABASE_URL: &str = "sqlite:vehicle_allocations.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} is not a valid origin: {value}")]
    InvalidCorsOrigin { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors_origin: None,
        }
    }
}

impl Config {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load the configuration through `lookup`, falling back to defaults for missing values
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(ConfigError::Empty { var: DATABASE_URL_VAR });
        }

        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidBindAddr {
            var: BIND_ADDR_VAR,
            value: raw_addr.clone(),
        })?;

        let cors_origin = lookup(CORS_ORIGIN_VAR).filter(|origin| !origin.trim().is_empty());
        if let Some(ref origin) = cors_origin {
            parse_origin(origin)?;
        }

        Ok(Self {
            database_url,
            bind_addr,
            cors_origin,
        })
    }

    /// CORS policy for the API: the configured origin, or any origin
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);

        match self.cors_origin {
            Some(ref origin) => Ok(cors.allow_origin(parse_origin(origin)?)),
            None => Ok(cors.allow_origin(Any)),
        }
    }
}

fn parse_origin(origin: &str) -> Result<HeaderValue, ConfigError> {
    origin.parse::<HeaderValue>().map_err(|_| ConfigError::InvalidCorsOrigin {
        var: CORS_ORIGIN_VAR,
        value: origin.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr.port(), 8000);
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            (DATABASE_URL_VAR, "sqlite:/tmp/alloc.db"),
            (BIND_ADDR_VAR, "0.0.0.0:9000"),
            (CORS_ORIGIN_VAR, "http://localhost:8080"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite:/tmp/alloc.db");
        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:8080"));
        assert!(config.cors_layer().is_ok());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let result = Config::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")]));
        assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));
    }

    #[test]
    fn test_invalid_cors_origin() {
        let result = Config::from_lookup(lookup_from(&[(CORS_ORIGIN_VAR, "http://bad\norigin")]));
        assert!(matches!(result, Err(ConfigError::InvalidCorsOrigin { .. })));
    }

    #[test]
    fn test_blank_values() {
        let result = Config::from_lookup(lookup_from(&[(DATABASE_URL_VAR, "  ")]));
        assert!(matches!(result, Err(ConfigError::Empty { .. })));

        let config = Config::from_lookup(lookup_from(&[(CORS_ORIGIN_VAR, "")])).unwrap();
        assert!(config.cors_origin.is_none());
    }
}
