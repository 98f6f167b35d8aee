use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use unify_core::services::IdentityProvider;

use crate::app::AppState;
use crate::dto::{validation_failure, BindRequestDto};
use crate::handlers::error::ApiError;

/// Handler for POST /unify/bind
///
/// Binds a previously started flow to a phone number.
///
/// # Request Body
///
/// ```json
/// {
///     "correlationId": "8f0a2c36-...",
///     "phoneNumber": "+15551234567"
/// }
/// ```
pub async fn unify_bind<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    body: web::Json<BindRequestDto>,
) -> Result<HttpResponse, ApiError>
where
    P: IdentityProvider + 'static,
{
    let dto = body.into_inner();
    dto.validate()
        .map_err(|errors| ApiError::with_request(validation_failure(&errors), &req))?;
    let request = dto
        .into_domain()
        .map_err(|e| ApiError::with_request(e, &req))?;

    let result = state
        .verification_service
        .unify_bind(request)
        .await
        .map_err(|e| ApiError::with_request(e, &req))?;

    Ok(HttpResponse::Ok().json(result))
}
