//! Route handlers
//!
//! - `auth` - registration and login
//! - `accounts` - ranked listing and score updates
//! - `health` - liveness and account store reachability

pub mod accounts;
pub mod auth;
pub mod health;

use std::sync::Arc;

use sb_core::repositories::AccountRepository;
use sb_core::services::AccountService;

/// Application state that holds shared services
pub struct AppState<R>
where
    R: AccountRepository,
{
    pub account_service: Arc<AccountService<R>>,
}

impl<R> AppState<R>
where
    R: AccountRepository,
{
    /// Build the state around an account store
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            account_service: Arc::new(AccountService::new(repository)),
        }
    }
}
