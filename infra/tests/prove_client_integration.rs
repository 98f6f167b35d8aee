//! Integration tests driving the real Prove client against a local fake provider

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::collections::HashMap;

use unify_core::domain::{BindRequest, PossessionType, StatusQuery, VerificationRequest};
use unify_core::errors::ProviderError;
use unify_core::services::verification::IdentityProvider;
use unify_infra::{ProveClient, ProveConfig};

const FAKE_TOKEN: &str = "fake-access-token";

async fn token(form: web::Form<HashMap<String, String>>) -> HttpResponse {
    let valid = form.get("grant_type").map(String::as_str) == Some("client_credentials")
        && form.get("client_id").map(String::as_str) == Some("test-client")
        && form.get("client_secret").map(String::as_str) == Some("test-secret");

    if valid {
        HttpResponse::Ok().json(json!({
            "access_token": FAKE_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        }))
    } else {
        HttpResponse::Unauthorized().json(json!({
            "error": "invalid_client",
            "error_description": "client authentication failed"
        }))
    }
}

fn authorized(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v == format!("Bearer {}", FAKE_TOKEN))
}

async fn unify(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().json(json!({ "code": 1000, "message": "unauthorized" }));
    }
    HttpResponse::Ok().json(json!({
        "authToken": "auth-token-1",
        "correlationId": "corr-1",
        "success": "pending",
        "received": body.into_inner()
    }))
}

async fn unify_status(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Ok().json(json!({
        "success": true,
        "correlationId": body["correlationId"]
    }))
}

async fn unify_bind() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "code": 8000,
        "message": "phone number does not match"
    }))
}

/// Start the fake provider on an ephemeral port and return its base URL
fn start_fake_provider() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/token", web::post().to(token))
            .route("/v3/unify", web::post().to(unify))
            .route("/v3/unify-status", web::post().to(unify_status))
            .route("/v3/unify-bind", web::post().to(unify_bind))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake provider");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

fn client_for(base_url: &str, secret: &str) -> ProveClient {
    let config = ProveConfig::default()
        .with_base_url(base_url)
        .with_credentials("test-client", secret);
    ProveClient::new(config).expect("client builds")
}

#[actix_web::test]
async fn test_begin_unify_round_trip() {
    let base_url = start_fake_provider();
    let client = client_for(&base_url, "test-secret");

    let request = VerificationRequest::new(PossessionType::Mobile)
        .with_phone_number("+15551234567")
        .with_client_request_id("req-42");

    let result = client.begin_unify(&request).await.unwrap();
    assert_eq!(result.field("authToken"), Some(&json!("auth-token-1")));
    assert_eq!(result.field("correlationId"), Some(&json!("corr-1")));

    let received = result.field("received").unwrap();
    assert_eq!(received["possessionType"], "mobile");
    assert_eq!(received["phoneNumber"], "+15551234567");
    assert_eq!(received["clientRequestId"], "req-42");
    assert!(received.get("finalTargetUrl").is_none());
}

#[actix_web::test]
async fn test_unify_status_sends_correlation_id() {
    let base_url = start_fake_provider();
    let client = client_for(&base_url, "test-secret");

    let result = client
        .unify_status(&StatusQuery::new("abc-123").unwrap())
        .await
        .unwrap();
    assert_eq!(result.as_value(), &json!({ "success": true, "correlationId": "abc-123" }));
}

#[actix_web::test]
async fn test_vendor_rejection_carries_vendor_message() {
    let base_url = start_fake_provider();
    let client = client_for(&base_url, "test-secret");

    let err = client
        .unify_bind(&BindRequest::new("corr-1", "+15550000000").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, ProviderError::Request("phone number does not match".to_string()));
}

#[actix_web::test]
async fn test_bad_credentials_surface_token_error() {
    let base_url = start_fake_provider();
    let client = client_for(&base_url, "wrong-secret");

    let err = client
        .unify_status(&StatusQuery::new("abc-123").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, ProviderError::Request("client authentication failed".to_string()));
}

#[actix_web::test]
async fn test_unreachable_provider_is_a_request_error() {
    let client = client_for("http://127.0.0.1:1", "test-secret");

    let err = client
        .unify_status(&StatusQuery::new("abc-123").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Request(ref m) if !m.is_empty()));
}
