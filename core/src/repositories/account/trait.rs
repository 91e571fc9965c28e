//! Account repository trait defining the storage port of the account service.
//!
//! The service only ever talks to this trait, so it cannot tell whether
//! accounts live in process memory or in a relational table.

use async_trait::async_trait;

use crate::domain::entities::account::{Account, NewAccount, Score};
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// Implementations translate every collaborator failure into
/// `AccountError::StorageUnavailable` and must never panic on one.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use sb_core::domain::entities::account::{Account, NewAccount, Score};
/// use sb_core::errors::DomainError;
/// use sb_core::repositories::AccountRepository;
///
/// struct RemoteAccountRepository {
///     // client handle
/// }
///
/// #[async_trait]
/// impl AccountRepository for RemoteAccountRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn insert(&self, account: NewAccount) -> Result<Account, DomainError> { unimplemented!() }
/// #   async fn list_all(&self) -> Result<Vec<Account>, DomainError> { Ok(vec![]) }
/// #   async fn update_score_by_email(&self, email: &str, score: Score) -> Result<u64, DomainError> { Ok(0) }
/// #   fn backend_name(&self) -> &'static str { "remote" }
/// }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its email
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with that email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account with a zero score
    ///
    /// The uniqueness check and the write must be a single atomic step: two
    /// concurrent inserts with the same email must not both succeed.
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account with its assigned id
    /// * `Err(DomainError::Account(AccountError::DuplicateIdentity))` - Email taken
    /// * `Err(DomainError)` - Storage failure
    async fn insert(&self, account: NewAccount) -> Result<Account, DomainError>;

    /// Snapshot of every account, highest score first, ties in insertion order
    async fn list_all(&self) -> Result<Vec<Account>, DomainError>;

    /// Replace the score of the account with this email
    ///
    /// # Returns
    /// * `Ok(0)` - No account has this email
    /// * `Ok(1)` - The account's score now equals `score`
    /// * `Err(DomainError)` - Storage failure
    async fn update_score_by_email(&self, email: &str, score: Score) -> Result<u64, DomainError>;

    /// Probe the backing store. Stores without a remote collaborator are always healthy.
    async fn health_check(&self) -> Result<(), DomainError> {
        Ok(())
    }

    /// Short name of the backing store, for logs and the health endpoint
    fn backend_name(&self) -> &'static str;
}
