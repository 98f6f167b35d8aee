//! Supporting error types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The endpoint variant a provider call was made for
///
/// Each variant owns the fallback message used when the provider fails
/// without saying why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `POST /initialize`
    Initialize,
    /// `POST /unify`
    Unify,
    /// `POST /verify`
    Verify,
    /// `GET /unify/status/{correlationId}`
    UnifyStatus,
    /// `POST /unify/bind`
    UnifyBind,
}

impl Operation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Initialize => "Failed to initialize",
            Operation::Unify => "Failed to initiate unify",
            Operation::Verify => "Failed to verify",
            Operation::UnifyStatus => "Failed to check unify status",
            Operation::UnifyBind => "Failed to bind unify",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Initialize => "initialize",
            Operation::Unify => "unify",
            Operation::Verify => "verify",
            Operation::UnifyStatus => "unify_status",
            Operation::UnifyBind => "unify_bind",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violated request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Wire name of the field (camelCase)
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors raised by an `IdentityProvider` implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Credentials needed to reach the provider are not configured
    #[error("{0}")]
    MissingConfiguration(String),

    /// Network failure, vendor rejection or malformed vendor response
    #[error("{0}")]
    Request(String),
}
