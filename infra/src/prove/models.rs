//! Wire models for the Prove API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OAuth2 token endpoint response
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Body of `/v3/unify-status`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UnifyStatusBody<'a> {
    pub correlation_id: &'a str,
}

/// Body of `/v3/unify-bind`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UnifyBindBody<'a> {
    pub correlation_id: &'a str,
    pub phone_number: &'a str,
}

/// Error document returned by the vendor on non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub(crate) struct VendorErrorBody {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    /// The token endpoint reports OAuth errors in this field instead
    #[serde(default)]
    pub error_description: Option<String>,
}

impl VendorErrorBody {
    /// The most specific human readable message, if any
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error_description)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
