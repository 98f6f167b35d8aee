use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{
        header::{HeaderMap, HeaderName, HeaderValue},
        StatusCode,
    },
    Error, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

use unify_shared::ErrorEnvelope;

use crate::handlers::error::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Assigns a request id to every request and catches unhandled failures.
///
/// Any 500 that does not originate from `ApiError` is replaced by the
/// generic `{"error": "Internal server error"}` envelope, so internal
/// details never reach the client.
pub struct ErrorHandlerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        // Generate or extract request ID
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.trim().is_empty())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        req.extensions_mut().insert(RequestId(request_id.clone()));

        Box::pin(async move {
            let mut response = match service.call(req).await {
                Ok(res) if is_unhandled(res.status(), res.response().error()) => {
                    log_unhandled(&request_id, res.response().error());
                    let (req, _) = res.into_parts();
                    ServiceResponse::new(req, internal_error_response(&request_id))
                        .map_into_right_body()
                }
                Ok(res) => res.map_into_left_body(),
                Err(err) if is_unhandled(err.as_response_error().status_code(), Some(&err)) => {
                    log_unhandled(&request_id, Some(&err));
                    let response = internal_error_response(&request_id);
                    return Err(InternalError::from_response(err, response).into());
                }
                Err(err) => return Err(err),
            };

            insert_request_id(response.headers_mut(), &request_id);
            Ok(response)
        })
    }
}

fn is_unhandled(status: StatusCode, error: Option<&Error>) -> bool {
    status == StatusCode::INTERNAL_SERVER_ERROR
        && !error.map_or(false, |e| e.as_error::<ApiError>().is_some())
}

fn log_unhandled(request_id: &str, error: Option<&Error>) {
    match error {
        Some(error) => log::error!("[{}] Unhandled error: {}", request_id, error),
        None => log::error!("[{}] Unhandled internal server error", request_id),
    }
}

fn insert_request_id(headers: &mut HeaderMap, request_id: &str) {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
}

fn internal_error_response(request_id: &str) -> HttpResponse {
    let mut response = HttpResponse::InternalServerError().json(ErrorEnvelope::internal());
    insert_request_id(response.headers_mut(), request_id);
    response
}

/// Access to the request id assigned by `ErrorHandlerMiddleware`
pub trait RequestIdExt {
    fn request_id(&self) -> Option<String>;
}

impl RequestIdExt for ServiceRequest {
    fn request_id(&self) -> Option<String> {
        self.extensions().get::<RequestId>().map(|id| id.0.clone())
    }
}

impl RequestIdExt for HttpRequest {
    fn request_id(&self) -> Option<String> {
        self.extensions().get::<RequestId>().map(|id| id.0.clone())
    }
}
