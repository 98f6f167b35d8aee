//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App,
};

use unify_core::services::{IdentityProvider, VerificationService};
use unify_shared::CorsConfig;

use crate::handlers::error::{json_error_handler, not_found, path_error_handler};
use crate::middleware::{cors::create_cors, error_handler::ErrorHandlerMiddleware};
use crate::routes::health::{health_check, root};
use crate::routes::verification::{initialize, unify, unify_bind, unify_status, verify};

/// Application state that holds shared services
pub struct AppState<P>
where
    P: IdentityProvider,
{
    pub verification_service: Arc<VerificationService<P>>,
}

impl<P> AppState<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            verification_service: Arc::new(VerificationService::new(provider)),
        }
    }
}

/// Register every gateway route
pub fn configure_routes<P>(cfg: &mut web::ServiceConfig)
where
    P: IdentityProvider + 'static,
{
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/initialize", web::post().to(initialize::<P>))
        .route("/unify", web::post().to(unify::<P>))
        .route("/verify", web::post().to(verify::<P>))
        .route("/unify/status/{correlation_id}", web::get().to(unify_status::<P>))
        .route("/unify/bind", web::post().to(unify_bind::<P>));
}

/// Create and configure the application with all dependencies
pub fn create_app<P>(
    app_state: web::Data<AppState<P>>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: IdentityProvider + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Add middleware (order matters: request ids and the safety net
        // innermost, then CORS, then access logging)
        .wrap(ErrorHandlerMiddleware)
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .configure(configure_routes::<P>)
        // Default 404 handler
        .default_service(web::route().to(not_found))
}
