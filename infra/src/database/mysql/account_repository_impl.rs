//! MySQL implementation of the AccountRepository trait.
//!
//! Email uniqueness is enforced by the `uq_accounts_email` index, so two
//! concurrent registrations cannot both commit; the losing insert comes back
//! as a unique violation and is reported as `DuplicateIdentity`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sb_core::domain::entities::account::{Account, AccountId, NewAccount, Score};
use sb_core::errors::{AccountError, DomainError};
use sb_core::repositories::AccountRepository;

const SELECT_COLUMNS: &str = "SELECT id, name, email, password, score, created_at FROM accounts";

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let get_err = |column: &str, e: sqlx::Error| {
            DomainError::Internal {
                message: format!("Failed to get {}: {}", column, e),
            }
        };

        Ok(Account {
            id: AccountId(row.try_get("id").map_err(|e| get_err("id", e))?),
            name: row.try_get("name").map_err(|e| get_err("name", e))?,
            email: row.try_get("email").map_err(|e| get_err("email", e))?,
            password: row.try_get("password").map_err(|e| get_err("password", e))?,
            score: row.try_get("score").map_err(|e| get_err("score", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| get_err("created_at", e))?,
        })
    }

    /// Map a driver failure to `StorageUnavailable`, logging the detail
    fn storage_error(operation: &str, e: sqlx::Error) -> DomainError {
        tracing::error!("Account store {} failed: {}", operation, e);
        DomainError::storage(format!("{}: {}", operation, e))
    }

    fn is_unique_violation(e: &sqlx::Error) -> bool {
        match e {
            sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
            _ => false,
        }
    }

    /// Resolve the stored account after a committed insert.
    ///
    /// The row exists once the INSERT succeeds, so a failed or empty read-back
    /// falls back to the submitted fields with a local timestamp instead of
    /// reporting an error for a registration that already happened.
    pub(crate) fn settle_insert(
        id: AccountId,
        account: NewAccount,
        read_back: Result<Option<Account>, DomainError>,
    ) -> Account {
        match read_back {
            Ok(Some(stored)) => stored,
            Ok(None) => Account::from_new(id, account, Utc::now()),
            Err(e) => {
                tracing::warn!("Read-back of account {} failed after insert: {}", id.0, e);
                Account::from_new(id, account, Utc::now())
            }
        }
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::storage_error("find_by_id", e))?;

        result.as_ref().map(Self::row_to_account).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM accounts WHERE email = ?
            ) AS account_exists
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::storage_error("exists_by_email", e))?;

        let exists: i64 = row.try_get("account_exists").map_err(|e| DomainError::Internal {
            message: format!("Failed to get existence result: {}", e),
        })?;

        Ok(exists == 1)
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::storage_error("find_by_email", e))?;

        result.as_ref().map(Self::row_to_account).transpose()
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (name, email, password, score)
            VALUES (?, ?, ?, 0)
        "#;

        let result = sqlx::query(query)
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.password)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if Self::is_unique_violation(&e) {
                    DomainError::Account(AccountError::DuplicateIdentity)
                } else {
                    Self::storage_error("insert", e)
                }
            })?;

        let id = AccountId(result.last_insert_id() as i64);

        // Read back for the server-assigned created_at
        let read_back = self.find_by_id(id).await;
        Ok(Self::settle_insert(id, account, read_back))
    }

    async fn list_all(&self) -> Result<Vec<Account>, DomainError> {
        let query = format!("{} ORDER BY score DESC, id ASC", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::storage_error("list_all", e))?;

        rows.iter().map(Self::row_to_account).collect()
    }

    async fn update_score_by_email(&self, email: &str, score: Score) -> Result<u64, DomainError> {
        let query = "UPDATE accounts SET score = ? WHERE email = ?";

        let result = sqlx::query(query)
            .bind(score)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("update_score_by_email", e))?;

        if result.rows_affected() > 0 {
            return Ok(result.rows_affected());
        }

        // MySQL counts changed rows: rewriting the current score reports 0
        if self.exists_by_email(email).await? {
            Ok(1)
        } else {
            Ok(0)
        }
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("health_check", e))?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mysql"
    }
}
