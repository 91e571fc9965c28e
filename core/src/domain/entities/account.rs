//! Account entity representing a registered player and their current score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned account identifier.
///
/// Both store implementations hand out ids in insertion order, so comparing
/// ids compares registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score value. Replaced wholesale on update, never accumulated.
pub type Score = i64;

/// Account entity as persisted by an `AccountRepository`.
///
/// Not `Serialize`: the password stays inside the core. Anything crossing a
/// boundary goes through one of the projections below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Identifier assigned by the store on insert
    pub id: AccountId,

    /// Display name, fixed at registration
    pub name: String,

    /// Unique identity key
    pub email: String,

    /// Opaque credential, compared by exact match
    pub password: String,

    /// Current score
    pub score: Score,

    /// When the store accepted the account
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build the entity a store returns from a successful insert.
    pub fn from_new(id: AccountId, new_account: NewAccount, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new_account.name,
            email: new_account.email,
            password: new_account.password,
            score: 0,
            created_at,
        }
    }

    /// Exact-match credential check
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn to_registered(&self) -> RegisteredAccount {
        RegisteredAccount {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            score: self.score,
        }
    }

    pub fn to_authenticated(&self) -> AuthenticatedAccount {
        AuthenticatedAccount {
            id: self.id,
            name: self.name.clone(),
            score: self.score,
        }
    }

    pub fn to_ranked(&self) -> RankedAccount {
        RankedAccount {
            name: self.name.clone(),
            email: self.email.clone(),
            score: self.score,
        }
    }
}

/// Validated input for creating an account. Score always starts at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredAccount {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub score: Score,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedAccount {
    pub id: AccountId,
    pub name: String,
    pub score: Score,
}

/// One row of the ranked listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedAccount {
    pub name: String,
    pub email: String,
    pub score: Score,
}

/// Result of a successful score replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub email: String,
    #[serde(rename = "finalScore")]
    pub final_score: Score,
}

/// Order accounts for the leaderboard: highest score first, earlier
/// registrations first among equal scores.
pub fn rank_accounts(accounts: &mut [Account]) {
    accounts.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64, score: Score) -> Account {
        Account {
            id: AccountId(id),
            name: format!("player{}", id),
            email: format!("player{}@example.com", id),
            password: "secret".to_string(),
            score,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_new_starts_at_zero() {
        let new_account = NewAccount {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "pw1".to_string(),
        };
        let account = Account::from_new(AccountId(7), new_account, Utc::now());

        assert_eq!(account.id, AccountId(7));
        assert_eq!(account.score, 0);
        assert!(account.password_matches("pw1"));
        assert!(!account.password_matches("PW1"));
        assert!(!account.password_matches("pw1 "));
    }

    #[test]
    fn test_projections_never_carry_password() {
        let account = account(1, 42);

        let registered = serde_json::to_value(account.to_registered()).unwrap();
        let authenticated = serde_json::to_value(account.to_authenticated()).unwrap();
        let ranked = serde_json::to_value(account.to_ranked()).unwrap();

        for json in [&registered, &authenticated, &ranked] {
            assert!(json.get("password").is_none());
            assert_eq!(json["score"], 42);
        }
        assert_eq!(authenticated, serde_json::json!({"id": 1, "name": "player1", "score": 42}));
        assert!(ranked.get("id").is_none());
    }

    #[test]
    fn test_score_update_uses_final_score_key() {
        let update = ScoreUpdate {
            email: "ana@x.com".to_string(),
            final_score: 42,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["finalScore"], 42);
    }

    #[test]
    fn test_rank_orders_by_score_then_insertion() {
        let mut accounts = vec![account(1, 3), account(2, 10), account(3, 1), account(4, 10)];
        rank_accounts(&mut accounts);

        let order: Vec<i64> = accounts.iter().map(|a| a.id.0).collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
    }
}
