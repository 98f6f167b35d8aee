//! Main verification service implementation

use std::sync::Arc;

use unify_shared::phone::{is_e164, mask_phone_number};

use crate::domain::{BindRequest, StatusQuery, VerificationRequest, VerificationResult};
use crate::errors::{GatewayError, GatewayResult, Operation};

use super::traits::IdentityProvider;

/// Dispatches validated requests to the identity provider
///
/// The service holds no per-request state; every method performs exactly
/// one provider call and never retries.
pub struct VerificationService<P: IdentityProvider> {
    provider: Arc<P>,
}

impl<P: IdentityProvider> VerificationService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Begin a unify flow for `POST /initialize` or `POST /unify`
    ///
    /// # Arguments
    ///
    /// * `request` - Decoded request; a missing `clientRequestId` is generated here
    /// * `operation` - Endpoint variant, used for the failure fallback message
    pub async fn begin_unify(
        &self,
        request: VerificationRequest,
        operation: Operation,
    ) -> GatewayResult<VerificationResult> {
        request.validate()?;
        let request = request.with_generated_request_id();

        if let Some(phone) = request.phone_number.as_deref() {
            if !is_e164(phone) {
                tracing::warn!(
                    phone = %mask_phone_number(phone),
                    operation = %operation,
                    "Phone number is not in E.164 format, forwarding unchanged"
                );
            }
        }

        tracing::info!(
            operation = %operation,
            possession_type = %request.possession_type,
            client_request_id = request.client_request_id.as_deref().unwrap_or_default(),
            "Starting unify verification"
        );

        match self.provider.begin_unify(&request).await {
            Ok(result) => Ok(result),
            Err(error) => {
                tracing::error!(operation = %operation, error = %error, "Provider rejected unify request");
                Err(GatewayError::from_provider(operation, error))
            }
        }
    }

    /// Fetch unify status for `POST /verify` or `GET /unify/status/{id}`
    pub async fn unify_status(
        &self,
        query: StatusQuery,
        operation: Operation,
    ) -> GatewayResult<VerificationResult> {
        tracing::info!(
            operation = %operation,
            correlation_id = %query.correlation_id,
            "Checking unify status"
        );

        self.provider.unify_status(&query).await.map_err(|error| {
            tracing::error!(
                operation = %operation,
                correlation_id = %query.correlation_id,
                error = %error,
                "Provider status lookup failed"
            );
            GatewayError::from_provider(operation, error)
        })
    }

    /// Bind a unify flow to a phone number for `POST /unify/bind`
    pub async fn unify_bind(&self, request: BindRequest) -> GatewayResult<VerificationResult> {
        let operation = Operation::UnifyBind;

        tracing::info!(
            correlation_id = %request.correlation_id,
            phone = %mask_phone_number(&request.phone_number),
            "Binding unify flow"
        );

        self.provider.unify_bind(&request).await.map_err(|error| {
            tracing::error!(
                correlation_id = %request.correlation_id,
                error = %error,
                "Provider bind failed"
            );
            GatewayError::from_provider(operation, error)
        })
    }
}
