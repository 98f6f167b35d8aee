use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use unify_core::domain::StatusQuery;
use unify_core::errors::Operation;
use unify_core::services::IdentityProvider;

use crate::app::AppState;
use crate::dto::{validation_failure, StatusRequestDto};
use crate::handlers::error::ApiError;

/// Handler for POST /verify
///
/// # Request Body
///
/// ```json
/// { "correlationId": "8f0a2c36-..." }
/// ```
pub async fn verify<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    body: web::Json<StatusRequestDto>,
) -> Result<HttpResponse, ApiError>
where
    P: IdentityProvider + 'static,
{
    let dto = body.into_inner();
    dto.validate()
        .map_err(|errors| ApiError::with_request(validation_failure(&errors), &req))?;
    let query = dto
        .into_domain()
        .map_err(|e| ApiError::with_request(e, &req))?;

    check_status(&req, &state, query, Operation::Verify).await
}

/// Handler for GET /unify/status/{correlationId}
pub async fn unify_status<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    P: IdentityProvider + 'static,
{
    let query = StatusQuery::new(path.into_inner())
        .map_err(|e| ApiError::with_request(e, &req))?;

    check_status(&req, &state, query, Operation::UnifyStatus).await
}

async fn check_status<P>(
    req: &HttpRequest,
    state: &AppState<P>,
    query: StatusQuery,
    operation: Operation,
) -> Result<HttpResponse, ApiError>
where
    P: IdentityProvider + 'static,
{
    let result = state
        .verification_service
        .unify_status(query, operation)
        .await
        .map_err(|e| ApiError::with_request(e, req))?;

    Ok(HttpResponse::Ok().json(result))
}
