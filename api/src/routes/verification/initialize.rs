use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use unify_core::domain::VerificationRequest;
use unify_core::errors::Operation;
use unify_core::services::IdentityProvider;

use crate::app::AppState;
use crate::dto::{validation_failure, VerificationRequestDto};
use crate::handlers::error::ApiError;
use crate::middleware::error_handler::RequestIdExt;

/// Handler for POST /initialize
///
/// Starts a unify flow and answers with `{authToken, correlationId, success}`
/// only.
///
/// # Request Body
///
/// ```json
/// {
///     "possessionType": "mobile",
///     "phoneNumber": "+15551234567"
/// }
/// ```
pub async fn initialize<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    body: web::Json<VerificationRequestDto>,
) -> Result<HttpResponse, ApiError>
where
    P: IdentityProvider + 'static,
{
    let request = decode(&req, body.into_inner())?;

    let result = state
        .verification_service
        .begin_unify(request, Operation::Initialize)
        .await
        .map_err(|e| ApiError::with_request(e, &req))?;

    Ok(HttpResponse::Ok().json(result.summary()))
}

/// Handler for POST /unify
///
/// Same input as `/initialize`; the provider response is returned unchanged.
pub async fn unify<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    body: web::Json<VerificationRequestDto>,
) -> Result<HttpResponse, ApiError>
where
    P: IdentityProvider + 'static,
{
    let request = decode(&req, body.into_inner())?;

    let result = state
        .verification_service
        .begin_unify(request, Operation::Unify)
        .await
        .map_err(|e| ApiError::with_request(e, &req))?;

    Ok(HttpResponse::Ok().json(result))
}

fn decode(req: &HttpRequest, dto: VerificationRequestDto) -> Result<VerificationRequest, ApiError> {
    if let Err(errors) = dto.validate() {
        return Err(ApiError::with_request(validation_failure(&errors), req));
    }

    log::debug!(
        "[{}] Decoded unify request for possession type {:?}",
        req.request_id().unwrap_or_default(),
        dto.possession_type
    );

    dto.into_domain()
        .map_err(|e| ApiError::with_request(e, req))
}
