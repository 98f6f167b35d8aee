//! Request bodies accepted by the verification endpoints.
//!
//! Every field is optional at decode time so that a missing field becomes a
//! 400 with a readable message instead of a JSON decode failure.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use unify_core::domain::{BindRequest, PossessionType, StatusQuery, VerificationRequest};
use unify_core::errors::{FieldViolation, GatewayError};

const FINAL_TARGET_URL_REQUIRED: &str = "finalTargetUrl is required for desktop possession type";

/// Body of `POST /initialize` and `POST /unify`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_possession"))]
pub struct VerificationRequestDto {
    /// One of "mobile", "desktop" or "none"
    #[validate(
        required(message = "possessionType is required"),
        length(min = 1, message = "possessionType is required")
    )]
    pub possession_type: Option<String>,

    /// Subscriber phone number, ideally E.164
    pub phone_number: Option<String>,

    /// Redirect target, required for desktop
    pub final_target_url: Option<String>,

    pub sms_message: Option<String>,
    pub client_customer_id: Option<String>,
    pub client_request_id: Option<String>,

    #[serde(rename = "allowOTPRetry")]
    pub allow_otp_retry: Option<bool>,

    pub rebind: Option<bool>,
}

impl VerificationRequestDto {
    /// Convert a validated body into the domain request
    pub fn into_domain(self) -> Result<VerificationRequest, GatewayError> {
        let possession_type: PossessionType = self
            .possession_type
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|_| {
                GatewayError::missing_fields(vec![FieldViolation::new(
                    "possessionType",
                    possession_type_invalid(),
                )])
            })?;

        let mut request = VerificationRequest::new(possession_type);
        request.phone_number = self.phone_number;
        request.final_target_url = self.final_target_url;
        request.sms_message = self.sms_message;
        request.client_customer_id = self.client_customer_id;
        request.client_request_id = self.client_request_id;
        request.allow_otp_retry = self.allow_otp_retry;
        request.rebind = self.rebind;
        Ok(request)
    }
}

/// Cross-field rules: allowed possession types and the desktop target URL.
///
/// The error code carries the offending field's wire name.
fn validate_possession(dto: &VerificationRequestDto) -> Result<(), ValidationError> {
    let Some(value) = dto.possession_type.as_deref() else {
        return Ok(());
    };

    let possession_type: PossessionType = match value.parse() {
        Ok(possession_type) => possession_type,
        Err(_) => return Err(violation("possessionType", possession_type_invalid())),
    };

    let missing_target = dto
        .final_target_url
        .as_deref()
        .map_or(true, |url| url.trim().is_empty());
    if possession_type.requires_final_target_url() && missing_target {
        return Err(violation("finalTargetUrl", FINAL_TARGET_URL_REQUIRED));
    }

    Ok(())
}

fn violation(field: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(field);
    error.message = Some(message.into());
    error
}

fn possession_type_invalid() -> String {
    format!(
        "possessionType must be one of: {}",
        PossessionType::ALLOWED.join(", ")
    )
}

/// Body of `POST /verify`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequestDto {
    #[validate(
        required(message = "correlationId is required"),
        length(min = 1, message = "correlationId is required")
    )]
    pub correlation_id: Option<String>,
}

impl StatusRequestDto {
    pub fn into_domain(self) -> Result<StatusQuery, GatewayError> {
        StatusQuery::new(self.correlation_id.unwrap_or_default())
    }
}

/// Body of `POST /unify/bind`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BindRequestDto {
    #[validate(
        required(message = "correlationId and phoneNumber are required"),
        length(min = 1, message = "correlationId and phoneNumber are required")
    )]
    pub correlation_id: Option<String>,

    #[validate(
        required(message = "correlationId and phoneNumber are required"),
        length(min = 1, message = "correlationId and phoneNumber are required")
    )]
    pub phone_number: Option<String>,
}

impl BindRequestDto {
    pub fn into_domain(self) -> Result<BindRequest, GatewayError> {
        BindRequest::new(
            self.correlation_id.unwrap_or_default(),
            self.phone_number.unwrap_or_default(),
        )
    }
}

/// Flatten validator errors into a single validation failure.
///
/// Field errors are keyed by their camelCase wire name; struct-level errors
/// use their code as the field name. Violations are ordered by field.
pub fn validation_failure(errors: &ValidationErrors) -> GatewayError {
    let mut by_field: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        for error in field_errors.iter() {
            let name = if field == "__all__" {
                error.code.to_string()
            } else {
                camel_case(&field)
            };
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", name));
            by_field.entry(name).or_default().push(message);
        }
    }

    let violations = by_field
        .into_iter()
        .flat_map(|(field, messages)| {
            messages
                .into_iter()
                .map(move |message| FieldViolation::new(field.clone(), message))
        })
        .collect();

    GatewayError::missing_fields(violations)
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
