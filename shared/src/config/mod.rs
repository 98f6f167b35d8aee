//! Configuration module
//!
//! - `environment` - Environment detection and default log level
//! - `server` - HTTP bind address and CORS policy
//!
//! Provider credentials live with the provider client in `unify_infra`.

pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Process-wide configuration, built once at startup and shared read-only
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_app_config_from_env() {
        env::remove_var("ALLOWED_ORIGINS");
        env::set_var("PORT", "4100");
        env::set_var("ENVIRONMENT", "production");

        let config = AppConfig::from_env();
        assert_eq!(config.server.port, 4100);
        assert!(config.environment.is_production());
        assert_eq!(config.cors.allowed_origins.len(), 3);

        env::remove_var("PORT");
        env::remove_var("ENVIRONMENT");
    }
}
