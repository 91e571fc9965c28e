//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the scoreboard backend.
//! It provides the MySQL implementation of the account store port defined in
//! `sb_core`, together with connection pool management and schema bootstrap.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use sb_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration consumed by the infrastructure layer

    pub use sb_shared::config::database::DatabaseConfig;
}

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlAccountRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
