//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Unify Gateway.
//! It provides the concrete `IdentityProvider` that talks to the Prove
//! platform over HTTPS.
//!
//! ## Architecture
//!
//! - **Prove**: OAuth2 client-credentials token exchange and the three
//!   unify operations (`/v3/unify`, `/v3/unify-status`, `/v3/unify-bind`)

/// Prove identity provider client
pub mod prove;

pub use prove::{ProveClient, ProveConfig, ProveEnvironment};

use unify_core::errors::ProviderError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Identity provider answered with something unusable
    #[error("Identity provider error: {0}")]
    Provider(String),
}

impl From<InfrastructureError> for ProviderError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Config(message) => ProviderError::MissingConfiguration(message),
            InfrastructureError::Http(e) => ProviderError::Request(e.to_string()),
            InfrastructureError::Provider(message) => ProviderError::Request(message),
        }
    }
}
