//! Recording identity provider for tests
//!
//! Returns a canned response (or error) per operation and keeps every
//! request it receives, so tests can assert both what was forwarded and
//! that nothing was forwarded at all.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

use crate::domain::{BindRequest, StatusQuery, VerificationRequest, VerificationResult};
use crate::errors::ProviderError;

use super::traits::IdentityProvider;

type Reply = Result<Value, ProviderError>;

pub struct MockIdentityProvider {
    unify_reply: Reply,
    status_reply: Reply,
    bind_reply: Reply,
    unify_requests: Mutex<Vec<VerificationRequest>>,
    status_requests: Mutex<Vec<StatusQuery>>,
    bind_requests: Mutex<Vec<BindRequest>>,
}

impl MockIdentityProvider {
    /// Provider answering every operation with a typical successful payload
    pub fn new() -> Self {
        Self {
            unify_reply: Ok(json!({
                "authToken": "mock-auth-token",
                "correlationId": "mock-correlation-id",
                "success": "pending"
            })),
            status_reply: Ok(json!({ "success": true })),
            bind_reply: Ok(json!({ "success": true, "phoneNumber": "+15551234567" })),
            unify_requests: Mutex::new(Vec::new()),
            status_requests: Mutex::new(Vec::new()),
            bind_requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider failing every operation with `error`
    pub fn failing(error: ProviderError) -> Self {
        Self::new()
            .with_unify_reply(Err(error.clone()))
            .with_status_reply(Err(error.clone()))
            .with_bind_reply(Err(error))
    }

    pub fn with_unify_reply(mut self, reply: Reply) -> Self {
        self.unify_reply = reply;
        self
    }

    pub fn with_status_reply(mut self, reply: Reply) -> Self {
        self.status_reply = reply;
        self
    }

    pub fn with_bind_reply(mut self, reply: Reply) -> Self {
        self.bind_reply = reply;
        self
    }

    pub fn unify_requests(&self) -> Vec<VerificationRequest> {
        self.unify_requests.lock().unwrap().clone()
    }

    pub fn status_requests(&self) -> Vec<StatusQuery> {
        self.status_requests.lock().unwrap().clone()
    }

    pub fn bind_requests(&self) -> Vec<BindRequest> {
        self.bind_requests.lock().unwrap().clone()
    }

    /// Total number of provider calls across all operations
    pub fn call_count(&self) -> usize {
        self.unify_requests.lock().unwrap().len()
            + self.status_requests.lock().unwrap().len()
            + self.bind_requests.lock().unwrap().len()
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn begin_unify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResult, ProviderError> {
        self.unify_requests.lock().unwrap().push(request.clone());
        self.unify_reply.clone().map(VerificationResult::new)
    }

    async fn unify_status(&self, query: &StatusQuery) -> Result<VerificationResult, ProviderError> {
        self.status_requests.lock().unwrap().push(query.clone());
        self.status_reply.clone().map(VerificationResult::new)
    }

    async fn unify_bind(&self, request: &BindRequest) -> Result<VerificationResult, ProviderError> {
        self.bind_requests.lock().unwrap().push(request.clone());
        self.bind_reply.clone().map(VerificationResult::new)
    }
}
