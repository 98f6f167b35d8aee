//! Error envelope returned by failing endpoints

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message used when a failure escapes every endpoint handler
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// `{ "error": "..." }`, optionally listing every violated field
///
/// `error` always carries a single human readable message so that clients
/// can keep matching on it; `fields` is only present for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Human-readable error message
    pub error: String,

    /// Violation messages keyed by request field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorEnvelope {
    /// Create an envelope carrying only a message
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }

    /// Create an envelope with per-field violation messages
    pub fn with_fields(error: impl Into<String>, fields: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            error: error.into(),
            fields: if fields.is_empty() { None } else { Some(fields) },
        }
    }

    /// The last-resort envelope for unhandled failures
    pub fn internal() -> Self {
        Self::new(INTERNAL_SERVER_ERROR)
    }
}
