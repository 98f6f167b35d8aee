//! Prove client configuration

use std::fmt;
use std::str::FromStr;

use unify_core::errors::ProviderError;

use crate::InfrastructureError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Prove service environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProveEnvironment {
    /// US sandbox
    #[default]
    UatUs,
    /// US production
    ProdUs,
    /// EU sandbox
    UatEu,
    /// EU production
    ProdEu,
}

impl ProveEnvironment {
    pub fn base_url(&self) -> &'static str {
        match self {
            ProveEnvironment::UatUs => "https://platform.uat.proveapis.com",
            ProveEnvironment::ProdUs => "https://platform.proveapis.com",
            ProveEnvironment::UatEu => "https://platform.uat.eu.proveapis.com",
            ProveEnvironment::ProdEu => "https://platform.eu.proveapis.com",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProveEnvironment::UatUs => "uat-us",
            ProveEnvironment::ProdUs => "prod-us",
            ProveEnvironment::UatEu => "uat-eu",
            ProveEnvironment::ProdEu => "prod-eu",
        }
    }
}

impl fmt::Display for ProveEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProveEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uat-us" => Ok(ProveEnvironment::UatUs),
            "prod-us" => Ok(ProveEnvironment::ProdUs),
            "uat-eu" => Ok(ProveEnvironment::UatEu),
            "prod-eu" => Ok(ProveEnvironment::ProdEu),
            other => Err(format!("Invalid Prove environment: {}", other)),
        }
    }
}

/// Borrowed client credentials, only available when both are configured
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

/// Prove client configuration
///
/// Credentials stay optional here: the process starts without them and
/// each provider call fails with a configuration error instead.
#[derive(Clone)]
pub struct ProveConfig {
    /// Service environment, used when no base URL override is set
    pub environment: ProveEnvironment,
    /// Base URL override (`DEVICE_API_BASE_URL`)
    pub base_url: Option<String>,
    /// OAuth client id (`CLIENT_ID`)
    pub client_id: Option<String>,
    /// OAuth client secret (`CLIENT_SECRET`)
    pub client_secret: Option<String>,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for ProveConfig {
    fn default() -> Self {
        Self {
            environment: ProveEnvironment::default(),
            base_url: None,
            client_id: None,
            client_secret: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ProveConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let environment = match non_empty_var("PROVE_ENV") {
            Some(value) => value.parse().map_err(InfrastructureError::Config)?,
            None => ProveEnvironment::default(),
        };

        Ok(Self {
            environment,
            base_url: non_empty_var("DEVICE_API_BASE_URL"),
            client_id: non_empty_var("CLIENT_ID"),
            client_secret: non_empty_var("CLIENT_SECRET"),
            request_timeout_secs: match non_empty_var("PROVE_REQUEST_TIMEOUT_SECS") {
                Some(value) => parse_timeout(&value)?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Base URL without a trailing slash
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
            .to_string()
    }

    /// Both credentials, or a configuration error naming the missing variables
    pub fn credentials(&self) -> Result<Credentials<'_>, ProviderError> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(client_id), Some(client_secret)) => Ok(Credentials {
                client_id,
                client_secret,
            }),
            (client_id, client_secret) => {
                let missing: Vec<&str> = [
                    client_id.is_none().then_some("CLIENT_ID"),
                    client_secret.is_none().then_some("CLIENT_SECRET"),
                ]
                .into_iter()
                .flatten()
                .collect();

                Err(ProviderError::MissingConfiguration(format!(
                    "Missing provider configuration: {} must be set",
                    missing.join(" and ")
                )))
            }
        }
    }
}

impl fmt::Debug for ProveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProveConfig")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Timeouts must be a positive number of seconds
fn parse_timeout(value: &str) -> Result<u64, InfrastructureError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(InfrastructureError::Config(format!(
            "Invalid PROVE_REQUEST_TIMEOUT_SECS: {}",
            value
        ))),
    }
}
