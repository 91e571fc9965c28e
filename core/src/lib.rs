//! # Scoreboard Core
//!
//! Core business logic and domain layer for the scoreboard backend.
//! This crate contains the account entity, the account service, the storage
//! port it depends on (with an in-memory implementation), and the error types
//! every other layer maps from.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Account, AccountId, AuthenticatedAccount, NewAccount, RankedAccount, RegisteredAccount,
    Score, ScoreUpdate,
};
pub use errors::{AccountError, DomainError, DomainResult};
pub use repositories::{AccountRepository, InMemoryAccountRepository};
pub use services::AccountService;
