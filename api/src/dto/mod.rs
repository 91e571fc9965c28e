//! Request bodies accepted by the HTTP API
//!
//! Responses are the account projections from `sb_core`, serialized as-is.

pub mod account;

pub use account::{Envelope, LoginRequest, RegisterRequest, UpdateScoreRequest};
