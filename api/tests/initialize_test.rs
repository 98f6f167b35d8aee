//! Tests for POST /initialize and POST /unify

mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use unify_api::create_app;
use unify_core::domain::PossessionType;
use unify_core::errors::ProviderError;
use unify_core::services::verification::mock::MockIdentityProvider;

#[actix_web::test]
async fn test_initialize_returns_summary_only() {
    let provider = Arc::new(MockIdentityProvider::new().with_unify_reply(Ok(json!({
        "authToken": "tok-1",
        "correlationId": "corr-1",
        "success": "pending",
        "next": { "v3-unify-status": "/v3/unify-status" }
    }))));
    let app = test::init_service(create_app(common::state(provider.clone()), &common::cors())).await;

    let req = test::TestRequest::post()
        .uri("/initialize")
        .set_json(json!({ "possessionType": "mobile", "phoneNumber": "+15551234567" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "authToken": "tok-1", "correlationId": "corr-1", "success": "pending" })
    );

    let forwarded = provider.unify_requests();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].possession_type, PossessionType::Mobile);
    assert_eq!(forwarded[0].phone_number.as_deref(), Some("+15551234567"));
}

#[actix_web::test]
async fn test_unify_returns_full_provider_result() {
    let reply = json!({
        "authToken": "tok-2",
        "correlationId": "corr-2",
        "success": "pending",
        "next": { "v3-unify-status": "/v3/unify-status" }
    });
    let provider = Arc::new(MockIdentityProvider::new().with_unify_reply(Ok(reply.clone())));
    let app = test::init_service(create_app(common::state(provider), &common::cors())).await;

    let req = test::TestRequest::post()
        .uri("/unify")
        .set_json(json!({ "possessionType": "none", "phoneNumber": "+15551234567" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, reply);
}

#[actix_web::test]
async fn test_missing_client_request_id_is_generated_per_call() {
    let provider = common::mock();
    let app = test::init_service(create_app(common::state(provider.clone()), &common::cors())).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/initialize")
            .set_json(json!({ "possessionType": "mobile" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let forwarded = provider.unify_requests();
    let first = forwarded[0].client_request_id.clone().unwrap();
    let second = forwarded[1].client_request_id.clone().unwrap();
    assert!(uuid::Uuid::parse_str(&first).is_ok());
    assert_ne!(first, second);
}

#[actix_web::test]
async fn test_supplied_client_request_id_is_kept() {
    let provider = common::mock();
    let app = test::init_service(create_app(common::state(provider.clone()), &common::cors())).await;

    let req = test::TestRequest::post()
        .uri("/unify")
        .set_json(json!({
            "possessionType": "desktop",
            "finalTargetUrl": "https://example.com/done",
            "clientRequestId": "client-req-7",
            "allowOTPRetry": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let forwarded = provider.unify_requests();
    assert_eq!(forwarded[0].client_request_id.as_deref(), Some("client-req-7"));
    assert_eq!(forwarded[0].allow_otp_retry, Some(true));
}

#[actix_web::test]
async fn test_missing_possession_type_is_rejected() {
    let provider = common::mock();
    let app = test::init_service(create_app(common::state(provider.clone()), &common::cors())).await;

    let req = test::TestRequest::post()
        .uri("/initialize")
        .set_json(json!({ "phoneNumber": "+15551234567" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "possessionType is required");
    assert_eq!(provider.call_count(), 0);
}

#[actix_web::test]
async fn test_unknown_possession_type_is_rejected() {
    let provider = common::mock();
    let app = test::init_service(create_app(common::state(provider.clone()), &common::cors())).await;

    let req = test::TestRequest::post()
        .uri("/unify")
        .set_json(json!({ "possessionType": "tablet" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "possessionType must be one of: mobile, desktop, none");
    assert_eq!(provider.call_count(), 0);
}

#[actix_web::test]
async fn test_desktop_without_final_target_url_is_rejected() {
    let provider = common::mock();
    let app = test::init_service(create_app(common::state(provider.clone()), &common::cors())).await;

    let req = test::TestRequest::post()
        .uri("/initialize")
        .set_json(json!({ "possessionType": "desktop", "phoneNumber": "+15551234567" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "finalTargetUrl is required for desktop possession type");
    assert!(body["fields"]["finalTargetUrl"].is_array());
    assert_eq!(provider.call_count(), 0);
}

#[actix_web::test]
async fn test_provider_message_is_returned() {
    let provider = Arc::new(MockIdentityProvider::failing(ProviderError::Request(
        "phone number is not eligible".to_string(),
    )));
    let app = test::init_service(create_app(common::state(provider), &common::cors())).await;

    let req = test::TestRequest::post()
        .uri("/initialize")
        .set_json(json!({ "possessionType": "mobile" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "phone number is not eligible" }));
}

#[actix_web::test]
async fn test_blank_provider_message_uses_endpoint_fallback() {
    let provider = Arc::new(MockIdentityProvider::failing(ProviderError::Request(String::new())));
    let app = test::init_service(create_app(common::state(provider), &common::cors())).await;

    for (uri, expected) in [
        ("/initialize", "Failed to initialize"),
        ("/unify", "Failed to initiate unify"),
    ] {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(json!({ "possessionType": "mobile" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], expected);
    }
}
