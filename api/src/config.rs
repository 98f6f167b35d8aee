use unify_infra::{InfrastructureError, ProveConfig};
use unify_shared::config::{AppConfig, CorsConfig, Environment, ServerConfig};

/// Everything the binary needs, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub prove: ProveConfig,
}

impl Config {
    /// Load from the process environment
    ///
    /// Only malformed values fail here. Absent provider credentials are
    /// reported per request instead.
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Ok(Config {
            app: AppConfig::from_env(),
            prove: ProveConfig::from_env()?,
        })
    }

    pub fn environment(&self) -> Environment {
        self.app.environment
    }

    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    pub fn cors(&self) -> &CorsConfig {
        &self.app.cors
    }

    pub fn has_provider_credentials(&self) -> bool {
        self.prove.credentials().is_ok()
    }
}
