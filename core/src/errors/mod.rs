//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::AccountError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl DomainError {
    /// Wrap a storage collaborator failure. The detail is kept for logs only.
    pub fn storage(detail: impl std::fmt::Display) -> Self {
        DomainError::Account(AccountError::StorageUnavailable {
            message: detail.to_string(),
        })
    }

    /// Shorthand for a rejected request field
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::Account(AccountError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        })
    }

    /// The account-level kind of this error, if it has one
    pub fn as_account_error(&self) -> Option<&AccountError> {
        match self {
            DomainError::Account(e) => Some(e),
            DomainError::Internal { .. } => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
