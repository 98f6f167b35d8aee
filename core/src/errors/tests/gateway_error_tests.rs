use crate::errors::{FieldViolation, GatewayError, Operation, ProviderError};

#[test]
fn test_missing_fields_uses_first_message() {
    let err = GatewayError::missing_fields(vec![
        FieldViolation::new("possessionType", "possessionType is required"),
        FieldViolation::new("finalTargetUrl", "finalTargetUrl is required for desktop possession type"),
    ]);
    assert_eq!(err.to_string(), "possessionType is required");
    assert!(err.is_client_error());
}

#[test]
fn test_provider_message_is_kept() {
    let err = GatewayError::from_provider(
        Operation::UnifyBind,
        ProviderError::Request("phone number mismatch".to_string()),
    );
    assert_eq!(err.to_string(), "phone number mismatch");
    assert!(!err.is_client_error());
}

#[test]
fn test_blank_provider_message_falls_back_per_operation() {
    let cases = [
        (Operation::Initialize, "Failed to initialize"),
        (Operation::Unify, "Failed to initiate unify"),
        (Operation::Verify, "Failed to verify"),
        (Operation::UnifyStatus, "Failed to check unify status"),
        (Operation::UnifyBind, "Failed to bind unify"),
    ];

    for (operation, expected) in cases {
        let err = GatewayError::from_provider(operation, ProviderError::Request(String::new()));
        match err {
            GatewayError::ProviderFailure { operation: op, message } => {
                assert_eq!(op, operation);
                assert_eq!(message, expected);
            }
            other => panic!("Expected provider failure, got {:?}", other),
        }
    }
}

#[test]
fn test_missing_configuration_passes_through() {
    let err = GatewayError::from_provider(
        Operation::Verify,
        ProviderError::MissingConfiguration("CLIENT_ID is not set".to_string()),
    );
    assert_eq!(err, GatewayError::MissingConfiguration("CLIENT_ID is not set".to_string()));
}
