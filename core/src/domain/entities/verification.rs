//! Verification request entities.
//!
//! Every value here lives for a single HTTP request. The serialized form is
//! the provider's camelCase JSON, with absent optionals omitted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{FieldViolation, GatewayError};

/// Message returned when a status lookup has no correlation id
pub const CORRELATION_ID_REQUIRED: &str = "correlationId is required";

/// Message returned when a bind request lacks either of its fields
pub const BIND_FIELDS_REQUIRED: &str = "correlationId and phoneNumber are required";

/// How the subscriber proves possession of the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PossessionType {
    /// Possession check runs on the mobile device itself
    Mobile,
    /// Possession check is sent to the phone from a desktop session
    Desktop,
    /// No possession check
    None,
}

impl PossessionType {
    /// Wire names accepted for `possessionType`
    pub const ALLOWED: [&'static str; 3] = ["mobile", "desktop", "none"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PossessionType::Mobile => "mobile",
            PossessionType::Desktop => "desktop",
            PossessionType::None => "none",
        }
    }

    /// Desktop flows redirect the user, so they need a target URL
    pub fn requires_final_target_url(&self) -> bool {
        matches!(self, PossessionType::Desktop)
    }
}

impl fmt::Display for PossessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PossessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(PossessionType::Mobile),
            "desktop" => Ok(PossessionType::Desktop),
            "none" => Ok(PossessionType::None),
            other => Err(format!("Invalid possession type: {}", other)),
        }
    }
}

/// Request to begin a unify (possession) verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub possession_type: PossessionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Required when `possession_type` is desktop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_target_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_customer_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_id: Option<String>,

    #[serde(
        rename = "allowOTPRetry",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_otp_retry: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebind: Option<bool>,
}

impl VerificationRequest {
    /// Create a request with only the possession type set
    pub fn new(possession_type: PossessionType) -> Self {
        Self {
            possession_type,
            phone_number: None,
            final_target_url: None,
            sms_message: None,
            client_customer_id: None,
            client_request_id: None,
            allow_otp_retry: None,
            rebind: None,
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_final_target_url(mut self, url: impl Into<String>) -> Self {
        self.final_target_url = Some(url.into());
        self
    }

    pub fn with_client_request_id(mut self, id: impl Into<String>) -> Self {
        self.client_request_id = Some(id.into());
        self
    }

    /// Check the cross-field rules that hold regardless of how the request was decoded
    pub fn validate(&self) -> Result<(), GatewayError> {
        let missing_target = self
            .final_target_url
            .as_deref()
            .map_or(true, |url| url.trim().is_empty());

        if self.possession_type.requires_final_target_url() && missing_target {
            return Err(GatewayError::missing_fields(vec![FieldViolation::new(
                "finalTargetUrl",
                "finalTargetUrl is required for desktop possession type",
            )]));
        }
        Ok(())
    }

    /// Fill `client_request_id` with a fresh UUID v4 when the caller sent none.
    ///
    /// The generated id is used for this call only and never stored.
    pub fn with_generated_request_id(mut self) -> Self {
        let missing = self
            .client_request_id
            .as_deref()
            .map_or(true, |id| id.trim().is_empty());
        if missing {
            self.client_request_id = Some(Uuid::new_v4().to_string());
        }
        self
    }
}

/// Status lookup for a previously started verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    pub correlation_id: String,
}

impl StatusQuery {
    /// Build a query, rejecting blank correlation ids
    pub fn new(correlation_id: impl Into<String>) -> Result<Self, GatewayError> {
        let correlation_id = correlation_id.into();
        if correlation_id.trim().is_empty() {
            return Err(GatewayError::missing_fields(vec![FieldViolation::new(
                "correlationId",
                CORRELATION_ID_REQUIRED,
            )]));
        }
        Ok(Self { correlation_id })
    }
}

/// Binds a vendor correlation id to a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindRequest {
    pub correlation_id: String,
    pub phone_number: String,
}

impl BindRequest {
    /// Build a bind request; both fields must be non-blank
    pub fn new(
        correlation_id: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let correlation_id = correlation_id.into();
        let phone_number = phone_number.into();

        let mut violations = Vec::new();
        if correlation_id.trim().is_empty() {
            violations.push(FieldViolation::new("correlationId", BIND_FIELDS_REQUIRED));
        }
        if phone_number.trim().is_empty() {
            violations.push(FieldViolation::new("phoneNumber", BIND_FIELDS_REQUIRED));
        }
        if !violations.is_empty() {
            return Err(GatewayError::missing_fields(violations));
        }

        Ok(Self {
            correlation_id,
            phone_number,
        })
    }
}
