//! Listener and CORS settings

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_PORT: u16 = 3000;

/// Where the HTTP listener binds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// actix worker count, 0 keeps the actix default (one per core)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Load from `HOST`, `PORT` and `WORKERS`; unparsable values fall back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            workers: env::var("WORKERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.workers),
        }
    }

    /// `host:port` for `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Browser cross-origin policy applied to every route
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact origins, or `*` for any
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Preflight cache lifetime in seconds
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            allowed_origins: owned(&[
                "http://localhost:5173",
                "http://localhost:3000",
                "http://localhost:8080",
            ]),
            allowed_methods: owned(&["GET", "POST", "PUT", "DELETE", "OPTIONS"]),
            allowed_headers: owned(&["Content-Type", "Authorization"]),
            allow_credentials: true,
            max_age: 3600,
        }
    }
}

impl CorsConfig {
    /// Load from `ALLOWED_ORIGINS` (comma separated) and `CORS_MAX_AGE`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let origins: Vec<String> = env::var("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if !origins.is_empty() {
            config.allowed_origins = origins;
        }

        if let Some(max_age) = env::var("CORS_MAX_AGE").ok().and_then(|v| v.parse().ok()) {
            config.max_age = max_age;
        }

        config
    }
}
