//! Unit tests for domain error types

use crate::errors::{AccountError, DomainError};

#[test]
fn test_invalid_credentials_message_does_not_mention_cause() {
    let message = AccountError::InvalidCredentials.to_string();
    assert_eq!(message, "Invalid email or password");
}

#[test]
fn test_storage_helper_wraps_detail() {
    let error = DomainError::storage("pool timed out");
    match error.as_account_error() {
        Some(AccountError::StorageUnavailable { message }) => assert_eq!(message, "pool timed out"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_invalid_input_names_field() {
    let error = DomainError::invalid_input("email", "must not be blank");
    assert_eq!(error.to_string(), "Invalid input for email: must not be blank");
}

#[test]
fn test_error_codes() {
    assert_eq!(AccountError::DuplicateIdentity.code(), "DUPLICATE_IDENTITY");
    assert_eq!(AccountError::InvalidCredentials.code(), "INVALID_CREDENTIALS");
    assert_eq!(AccountError::NotFound.code(), "NOT_FOUND");
    assert_eq!(
        AccountError::StorageUnavailable { message: String::new() }.code(),
        "STORAGE_UNAVAILABLE"
    );
}

#[test]
fn test_internal_has_no_account_kind() {
    let error = DomainError::Internal { message: "boom".to_string() };
    assert!(error.as_account_error().is_none());
}
