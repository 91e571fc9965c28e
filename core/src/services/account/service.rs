//! Main account service implementation

use std::sync::Arc;

use sb_shared::utils::mask_email;

use crate::domain::entities::account::{
    AuthenticatedAccount, NewAccount, RankedAccount, RegisteredAccount, ScoreUpdate,
};
use crate::errors::{AccountError, DomainError, DomainResult};
use crate::repositories::AccountRepository;

use super::validation::{require_field, require_secret, ScoreInput};

/// Account service: the single place account rules live
///
/// Generic over the storage port so the same rules run against the
/// in-memory store and the MySQL table.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    /// Account repository for persistence
    repository: Arc<R>,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create a new account service
    ///
    /// # Arguments
    ///
    /// * `repository` - Store the accounts are persisted in
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// The backing repository, for health probes
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Register a new account with a zero score
    ///
    /// This method:
    /// 1. Requires non-blank name, email and password
    /// 2. Rejects an email that already has an account
    /// 3. Inserts the account; a uniqueness violation raised by the store
    ///    (a concurrent registration won the race) is also a duplicate
    ///
    /// # Returns
    ///
    /// * `Ok(RegisteredAccount)` - The created account, without its password
    /// * `Err(DomainError)` - `InvalidInput`, `DuplicateIdentity` or `StorageUnavailable`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use sb_core::repositories::InMemoryAccountRepository;
    /// use sb_core::services::AccountService;
    ///
    /// async fn register() {
    ///     let service = AccountService::new(Arc::new(InMemoryAccountRepository::new()));
    ///     match service.register("Ana", "ana@x.com", "pw1").await {
    ///         Ok(account) => println!("Registered account {}", account.id),
    ///         Err(e) => eprintln!("Registration failed: {}", e),
    ///     }
    /// }
    /// ```
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<RegisteredAccount> {
        let name = require_field("name", name)?;
        let email = require_field("email", email)?;
        let password = require_secret("password", password)?;

        if self.repository.find_by_email(email).await?.is_some() {
            tracing::info!(email = %mask_email(email), "Registration rejected: email already registered");
            return Err(AccountError::DuplicateIdentity.into());
        }

        let new_account = NewAccount {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let account = match self.repository.insert(new_account).await {
            Ok(account) => account,
            Err(DomainError::Account(AccountError::DuplicateIdentity)) => {
                tracing::info!(email = %mask_email(email), "Registration lost a race for the same email");
                return Err(AccountError::DuplicateIdentity.into());
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            backend = self.repository.backend_name(),
            "Account registered"
        );

        Ok(account.to_registered())
    }

    /// Authenticate by email and password
    ///
    /// Unknown email and wrong password both fail with the same
    /// `InvalidCredentials` value, so callers cannot probe which emails exist.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticatedAccount)` - id, name and score of the account
    /// * `Err(DomainError)` - `InvalidInput`, `InvalidCredentials` or `StorageUnavailable`
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthenticatedAccount> {
        let email = require_field("email", email)?;
        let password = require_secret("password", password)?;

        match self.repository.find_by_email(email).await? {
            Some(account) if account.password_matches(password) => {
                tracing::info!(account_id = %account.id, "Login succeeded");
                Ok(account.to_authenticated())
            }
            _ => {
                tracing::warn!(email = %mask_email(email), "Login failed");
                Err(AccountError::InvalidCredentials.into())
            }
        }
    }

    /// List every account, highest score first
    ///
    /// Ties keep registration order. The result is a snapshot; later writes
    /// do not show up in it.
    pub async fn list_ranked(&self) -> DomainResult<Vec<RankedAccount>> {
        let accounts = self.repository.list_all().await?;
        tracing::debug!(count = accounts.len(), "Listed ranked accounts");
        Ok(accounts.iter().map(|a| a.to_ranked()).collect())
    }

    /// Replace the stored score of an account
    ///
    /// The previous score is not consulted: this is an overwrite, not a
    /// high-score check.
    ///
    /// # Arguments
    ///
    /// * `email` - Account to update
    /// * `new_score` - An `i64`, stored as is, or an `f64` that must be a finite whole number
    ///
    /// # Returns
    ///
    /// * `Ok(ScoreUpdate)` - The score now stored
    /// * `Err(DomainError)` - `InvalidInput`, `NotFound` or `StorageUnavailable`
    pub async fn update_score(
        &self,
        email: &str,
        new_score: impl Into<ScoreInput>,
    ) -> DomainResult<ScoreUpdate> {
        let email = require_field("email", email)?;
        let score = new_score.into().into_score()?;

        let rows = self.repository.update_score_by_email(email, score).await?;
        if rows == 0 {
            tracing::info!(email = %mask_email(email), "Score update for unknown account");
            return Err(AccountError::NotFound.into());
        }

        tracing::info!(email = %mask_email(email), score, "Score replaced");

        Ok(ScoreUpdate {
            email: email.to_string(),
            final_score: score,
        })
    }
}
