//! Shared configuration and wire types for the scoreboard server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration loaded from the environment
//! - Error response structures
//! - Health check response types
//! - Log-safe masking helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, ServerConfig, StorageBackend,
    StorageConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus, ServiceHealth};
pub use utils::mask_email;
