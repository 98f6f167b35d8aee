//! Prove API client implementing the gateway's identity provider seam

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

use unify_core::domain::{BindRequest, StatusQuery, VerificationRequest, VerificationResult};
use unify_core::errors::ProviderError;
use unify_core::services::verification::IdentityProvider;

use super::config::ProveConfig;
use super::models::{TokenResponse, UnifyBindBody, UnifyStatusBody, VendorErrorBody};
use crate::InfrastructureError;

const TOKEN_PATH: &str = "/token";
const UNIFY_PATH: &str = "/v3/unify";
const UNIFY_STATUS_PATH: &str = "/v3/unify-status";
const UNIFY_BIND_PATH: &str = "/v3/unify-bind";

/// HTTP client for the Prove platform
///
/// The inner `reqwest::Client` pools connections; everything else is
/// read-only configuration, so one instance serves all requests.
pub struct ProveClient {
    http: Client,
    config: ProveConfig,
}

impl ProveClient {
    /// Create a new client
    pub fn new(config: ProveConfig) -> Result<Self, InfrastructureError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        debug!(
            environment = %config.environment,
            base_url = %config.resolved_base_url(),
            "Prove client created"
        );

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ProveConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.resolved_base_url(), path)
    }

    /// Exchange the configured credentials for a bearer token
    async fn access_token(&self) -> Result<String, ProviderError> {
        let credentials = self.config.credentials()?;

        let response = self
            .http
            .post(self.url(TOKEN_PATH))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id),
                ("client_secret", credentials.client_secret),
            ])
            .send()
            .await
            .map_err(|e| request_failed("token", e))?;

        let body = read_body(response).await?;
        let token: TokenResponse = serde_json::from_value(body).map_err(|e| {
            InfrastructureError::Provider(format!("Malformed token response: {}", e))
        })?;

        debug!(expires_in = ?token.expires_in, "Obtained provider access token");
        Ok(token.access_token)
    }

    /// POST a JSON body to an authenticated endpoint
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<VerificationResult, ProviderError> {
        let token = self.access_token().await?;

        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| request_failed(path, e))?;

        read_body(response).await.map(VerificationResult::new)
    }
}

#[async_trait]
impl IdentityProvider for ProveClient {
    async fn begin_unify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResult, ProviderError> {
        self.post_json(UNIFY_PATH, request).await
    }

    async fn unify_status(&self, query: &StatusQuery) -> Result<VerificationResult, ProviderError> {
        let body = UnifyStatusBody {
            correlation_id: &query.correlation_id,
        };
        self.post_json(UNIFY_STATUS_PATH, &body).await
    }

    async fn unify_bind(&self, request: &BindRequest) -> Result<VerificationResult, ProviderError> {
        let body = UnifyBindBody {
            correlation_id: &request.correlation_id,
            phone_number: &request.phone_number,
        };
        self.post_json(UNIFY_BIND_PATH, &body).await
    }
}

fn request_failed(endpoint: &str, e: reqwest::Error) -> ProviderError {
    error!(endpoint = endpoint, error = %e, "Request to identity provider failed");
    ProviderError::Request(e.to_string())
}

/// Decode a provider response, turning non-2xx answers into errors
async fn read_body(response: Response) -> Result<Value, ProviderError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ProviderError::Request(e.to_string()))?;

    if !status.is_success() {
        return Err(ProviderError::Request(vendor_error_message(status, &text)));
    }

    if text.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_str(&text).map_err(|e| {
        InfrastructureError::Provider(format!("Malformed provider response: {}", e)).into()
    })
}

/// Extract the vendor's message from an error body
pub(crate) fn vendor_error_message(status: StatusCode, body: &str) -> String {
    let parsed: VendorErrorBody = serde_json::from_str(body).unwrap_or_default();
    warn!(
        status = status.as_u16(),
        code = ?parsed.code,
        "Identity provider returned an error"
    );

    parsed
        .into_message()
        .unwrap_or_else(|| format!("provider returned HTTP {}", status.as_u16()))
}
