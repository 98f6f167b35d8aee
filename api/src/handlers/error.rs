//! HTTP mapping of gateway errors
//!
//! `GatewayError` is converted to a status code and `ErrorEnvelope` exactly
//! once, here.

use std::collections::BTreeMap;

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use unify_core::errors::GatewayError;
use unify_shared::ErrorEnvelope;

use crate::middleware::error_handler::RequestIdExt;

/// Handler-level error carrying the request id for log correlation
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: GatewayError,
    pub request_id: Option<String>,
}

impl ApiError {
    pub fn new(error: GatewayError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }

    /// Attach the request id assigned by `ErrorHandlerMiddleware`
    pub fn with_request(error: GatewayError, req: &HttpRequest) -> Self {
        Self {
            error,
            request_id: req.request_id(),
        }
    }

    fn envelope(&self) -> ErrorEnvelope {
        match &self.error {
            GatewayError::MissingField {
                message,
                violations,
            } => {
                let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
                for violation in violations {
                    fields
                        .entry(violation.field.clone())
                        .or_default()
                        .push(violation.message.clone());
                }
                ErrorEnvelope::with_fields(message.clone(), fields)
            }
            other => ErrorEnvelope::new(other.to_string()),
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(error: GatewayError) -> Self {
        ApiError::new(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        if self.error.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let request_id = self.request_id.as_deref().unwrap_or("-");
        if self.error.is_client_error() {
            log::warn!("[{}] Rejected request: {}", request_id, self.error);
        } else {
            log::error!("[{}] Request failed: {:?}", request_id, self.error);
        }

        HttpResponse::build(self.status_code()).json(self.envelope())
    }
}

/// Turns JSON extractor failures into a 400 envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid JSON body: {}", err);
    log::warn!(
        "[{}] {} {} - {}",
        req.request_id().as_deref().unwrap_or("-"),
        req.method(),
        req.path(),
        message
    );

    let response = HttpResponse::BadRequest().json(ErrorEnvelope::new(message));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Turns path extractor failures into a 400 envelope
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ErrorEnvelope::new(format!("Invalid path: {}", err)));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorEnvelope::new("Not found"))
}
