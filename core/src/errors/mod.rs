//! Error kinds produced by the gateway and mapped once to HTTP at the API boundary.

mod types;

#[cfg(test)]
mod tests;

pub use types::{FieldViolation, Operation, ProviderError};

use thiserror::Error;

/// Everything that can go wrong while serving one request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The caller omitted or blanked required fields (HTTP 400)
    ///
    /// `message` is the first violation's message; `violations` lists all of them.
    #[error("{message}")]
    MissingField {
        message: String,
        violations: Vec<FieldViolation>,
    },

    /// Provider credentials are absent from process configuration (HTTP 500)
    #[error("{0}")]
    MissingConfiguration(String),

    /// The provider call failed (HTTP 500)
    #[error("{message}")]
    ProviderFailure { operation: Operation, message: String },
}

impl GatewayError {
    /// Build a validation error from the collected violations
    pub fn missing_fields(violations: Vec<FieldViolation>) -> Self {
        let message = violations
            .first()
            .map(|v| v.message.clone())
            .unwrap_or_else(|| "Invalid request".to_string());
        GatewayError::MissingField { message, violations }
    }

    /// Convert a provider error raised while serving `operation`.
    ///
    /// Blank provider messages are replaced by the operation's fallback text.
    pub fn from_provider(operation: Operation, error: ProviderError) -> Self {
        match error {
            ProviderError::MissingConfiguration(message) => {
                GatewayError::MissingConfiguration(message)
            }
            ProviderError::Request(message) => {
                let message = if message.trim().is_empty() {
                    operation.fallback_message().to_string()
                } else {
                    message
                };
                GatewayError::ProviderFailure { operation, message }
            }
        }
    }

    /// Whether the caller is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, GatewayError::MissingField { .. })
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
