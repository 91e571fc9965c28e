use sb_core::errors::DomainError;
use sb_core::services::account::validation::ScoreInput;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// A request body sent either flat or wrapped under `"user"`.
///
/// Older clients post `{"user": {"name": ..., "email": ..., "password": ...}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { user: T },
    Flat(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { user } => user,
            Envelope::Flat(inner) => inner,
        }
    }
}

/// Body of `POST /api/v1/auth/register`
///
/// Missing fields deserialize as empty strings so the service can report
/// which one is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default, alias = "nome")]
    #[validate(length(max = 100))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub email: String,

    #[serde(default, alias = "senha")]
    #[validate(length(max = 255))]
    pub password: String,
}

/// Body of `POST /api/v1/auth/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub email: String,

    #[serde(default, alias = "senha")]
    #[validate(length(max = 255))]
    pub password: String,
}

/// Body of `PUT /api/v1/accounts/score`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateScoreRequest {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub email: String,

    /// A JSON number or a numeric string
    #[serde(default, alias = "pontuacao")]
    pub score: Value,
}

impl UpdateScoreRequest {
    /// The raw score, before range and integrality checks.
    ///
    /// Integers that fit an `i64` stay integers; anything else is read as a
    /// float.
    pub fn score_value(&self) -> Result<ScoreInput, DomainError> {
        match &self.score {
            Value::Number(n) => match n.as_i64() {
                Some(whole) => Ok(ScoreInput::Whole(whole)),
                None => n
                    .as_f64()
                    .map(ScoreInput::Decimal)
                    .ok_or_else(|| DomainError::invalid_input("score", "must be a number")),
            },
            Value::String(s) => {
                let s = s.trim();
                match s.parse::<i64>() {
                    Ok(whole) => Ok(ScoreInput::Whole(whole)),
                    Err(_) => s
                        .parse::<f64>()
                        .map(ScoreInput::Decimal)
                        .map_err(|_| DomainError::invalid_input("score", "must be a number")),
                }
            }
            Value::Null => Err(DomainError::invalid_input("score", "is required")),
            _ => Err(DomainError::invalid_input("score", "must be a number")),
        }
    }
}
