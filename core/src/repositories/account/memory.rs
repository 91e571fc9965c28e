//! Process-local implementation of AccountRepository
//!
//! Accounts persist for as long as the repository lives. Used by the server
//! when `STORAGE_BACKEND=memory` and by tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::{rank_accounts, Account, AccountId, NewAccount, Score};
use crate::errors::{AccountError, DomainError};

use super::trait_::AccountRepository;

#[derive(Default)]
struct State {
    /// Accounts in insertion order
    accounts: Vec<Account>,
    /// email -> index into `accounts`
    by_email: HashMap<String, usize>,
    last_id: i64,
}

/// In-memory account repository keyed by email
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryAccountRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.state.read().await.accounts.len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .by_email
            .get(email)
            .map(|&index| state.accounts[index].clone()))
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, DomainError> {
        let mut state = self.state.write().await;

        // Checked under the write lock, so concurrent inserts serialize here
        if state.by_email.contains_key(&account.email) {
            return Err(AccountError::DuplicateIdentity.into());
        }

        state.last_id += 1;
        let account = Account::from_new(AccountId(state.last_id), account, Utc::now());
        let index = state.accounts.len();
        state.by_email.insert(account.email.clone(), index);
        state.accounts.push(account.clone());
        Ok(account)
    }

    async fn list_all(&self) -> Result<Vec<Account>, DomainError> {
        let mut accounts = self.state.read().await.accounts.clone();
        rank_accounts(&mut accounts);
        Ok(accounts)
    }

    async fn update_score_by_email(&self, email: &str, score: Score) -> Result<u64, DomainError> {
        let mut state = self.state.write().await;
        let Some(&index) = state.by_email.get(email) else {
            return Ok(0);
        };
        state.accounts[index].score = score;
        Ok(1)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
