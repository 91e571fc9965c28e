//! Configuration module with sub-modules per concern
//!
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration
//! - `storage` - Which account store backs the service

pub mod database;
pub mod environment;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration, only consulted for the MySQL backend
    pub database: DatabaseConfig,

    /// Account store selection
    pub storage: StorageConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            storage: StorageConfig::from_env(),
            cors: CorsConfig::from_env(environment),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_reads_every_section() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", Some("production")),
                ("SERVER_PORT", Some("9090")),
                ("DATABASE_URL", Some("mysql://u:p@db:3306/scores")),
                ("STORAGE_BACKEND", Some("mysql")),
                ("ALLOWED_ORIGINS", Some("https://a.example, https://b.example")),
            ],
            || {
                let config = AppConfig::from_env();
                assert!(config.is_production());
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.database.url, "mysql://u:p@db:3306/scores");
                assert_eq!(config.storage.backend, StorageBackend::MySql);
                assert_eq!(
                    config.cors.allowed_origins,
                    vec!["https://a.example", "https://b.example"]
                );
            },
        );
    }

    #[test]
    fn test_defaults_without_environment() {
        temp_env::with_vars_unset(
            [
                "ENVIRONMENT",
                "ENV",
                "RUST_ENV",
                "SERVER_PORT",
                "STORAGE_BACKEND",
                "ALLOWED_ORIGINS",
            ],
            || {
                let config = AppConfig::from_env();
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.storage.backend, StorageBackend::Memory);
                assert!(config.cors.allowed_origins.is_empty());
            },
        );
    }

    #[test]
    fn test_default_is_a_development_memory_setup() {
        let config = AppConfig::default();
        assert!(!config.is_production());
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }
}
