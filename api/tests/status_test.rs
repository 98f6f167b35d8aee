//! Tests for POST /verify and GET /unify/status/{correlationId}

mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use unify_api::create_app;
use unify_core::errors::ProviderError;
use unify_core::services::verification::mock::MockIdentityProvider;

#[actix_web::test]
async fn test_status_by_path() {
    let provider = common::mock();
    let app = test::init_service(create_app(common::state(provider.clone()), &common::cors())).await;

    let req = test::TestRequest::get().uri("/unify/status/abc-123").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));

    let queries = provider.status_requests();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].correlation_id, "abc-123");
}

#[actix_web::test]
async fn test_verify_by_body() {
    let reply = json!({ "success": true, "phoneNumber": "+15551234567", "next": {} });
    let provider = Arc::new(MockIdentityProvider::new().with_status_reply(Ok(reply.clone())));
    let app = test::init_service(create_app(common::state(provider.clone()), &common::cors())).await;

    let req = test::TestRequest::post()
        .uri("/verify")
        .set_json(json!({ "correlationId": "corr-9" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, reply);
    assert_eq!(provider.status_requests()[0].correlation_id, "corr-9");
}

#[actix_web::test]
async fn test_verify_without_correlation_id_is_rejected() {
    let provider = common::mock();
    let app = test::init_service(create_app(common::state(provider.clone()), &common::cors())).await;

    for body in [json!({}), json!({ "correlationId": "" }), json!({ "correlationId": "   " })] {
        let req = test::TestRequest::post().uri("/verify").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "correlationId is required");
    }

    assert_eq!(provider.call_count(), 0);
}

#[actix_web::test]
async fn test_blank_path_correlation_id_is_rejected() {
    let provider = common::mock();
    let app = test::init_service(create_app(common::state(provider.clone()), &common::cors())).await;

    let req = test::TestRequest::get().uri("/unify/status/%20%20").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "correlationId is required");
    assert_eq!(provider.call_count(), 0);
}

#[actix_web::test]
async fn test_status_failures_use_endpoint_fallback() {
    let provider = Arc::new(MockIdentityProvider::failing(ProviderError::Request(String::new())));
    let app = test::init_service(create_app(common::state(provider), &common::cors())).await;

    let req = test::TestRequest::post()
        .uri("/verify")
        .set_json(json!({ "correlationId": "corr-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Failed to verify" }));

    let req = test::TestRequest::get().uri("/unify/status/corr-1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Failed to check unify status" }));
}
