//! Account error taxonomy
//!
//! Every outcome an account operation can fail with. All of them are
//! recoverable by the caller; none is fatal to the process.

use sb_shared::errors::error_codes;
use thiserror::Error;

/// Account operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// A request field is missing, blank or malformed
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Registration attempted with an email that already has an account
    #[error("An account with this email already exists")]
    DuplicateIdentity,

    /// Login failed. Unknown email and wrong password are the same error.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Score update for an email that has no account
    #[error("Account not found")]
    NotFound,

    /// The account store could not be reached or failed the operation
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },
}

impl AccountError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            AccountError::InvalidInput { .. } => error_codes::INVALID_INPUT,
            AccountError::DuplicateIdentity => error_codes::DUPLICATE_IDENTITY,
            AccountError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AccountError::NotFound => error_codes::NOT_FOUND,
            AccountError::StorageUnavailable { .. } => error_codes::STORAGE_UNAVAILABLE,
        }
    }
}
