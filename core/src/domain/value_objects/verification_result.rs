//! Provider result value objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The provider's response object, carried verbatim
///
/// The gateway never interprets the payload beyond the three fields exposed
/// through [`UnifySummary`]; pass-through endpoints serialize it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationResult(Value);

impl VerificationResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Look up a top-level field of the provider response
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    /// Reduce the result to `authToken`, `correlationId` and `success`
    pub fn summary(&self) -> UnifySummary {
        UnifySummary {
            auth_token: self.field("authToken").cloned(),
            correlation_id: self.field("correlationId").cloned(),
            success: self.field("success").cloned(),
        }
    }
}

impl From<Value> for VerificationResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Projection returned by `POST /initialize`
///
/// Fields the provider did not return are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifySummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<Value>,
}
