//! Shared helpers for endpoint tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use unify_api::AppState;
use unify_core::services::verification::mock::MockIdentityProvider;
use unify_core::services::IdentityProvider;
use unify_shared::CorsConfig;

/// Wrap a provider in application state
pub fn state<P: IdentityProvider>(provider: Arc<P>) -> web::Data<AppState<P>> {
    web::Data::new(AppState::new(provider))
}

pub fn mock() -> Arc<MockIdentityProvider> {
    Arc::new(MockIdentityProvider::new())
}

pub fn cors() -> CorsConfig {
    CorsConfig::default()
}
