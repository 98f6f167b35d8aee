//! Trait for identity provider integration

use async_trait::async_trait;

use crate::domain::{BindRequest, StatusQuery, VerificationRequest, VerificationResult};
use crate::errors::ProviderError;

/// The vendor API the gateway forwards to
///
/// Implementations must check their credentials on every call, so that a
/// process started without them still answers each request with a
/// configuration error instead of refusing to start.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Begin a unify possession check
    async fn begin_unify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResult, ProviderError>;

    /// Fetch the status of a unify flow
    async fn unify_status(&self, query: &StatusQuery) -> Result<VerificationResult, ProviderError>;

    /// Bind a unify flow to a phone number
    async fn unify_bind(&self, request: &BindRequest) -> Result<VerificationResult, ProviderError>;
}
