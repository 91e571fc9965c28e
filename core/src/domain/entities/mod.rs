//! Domain entities representing core business objects.

pub mod account;

pub use account::{
    rank_accounts, Account, AccountId, AuthenticatedAccount, NewAccount, RankedAccount,
    RegisteredAccount, Score, ScoreUpdate,
};
