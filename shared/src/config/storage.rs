//! Account store selection

use serde::{Deserialize, Serialize};

/// Which account store implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local store; accounts live as long as the server does
    #[default]
    Memory,
    /// MySQL table with a unique index on email
    MySql,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::MySql => "mysql",
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Ok(StorageBackend::Memory),
            "mysql" => Ok(StorageBackend::MySql),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

impl StorageConfig {
    /// Read `STORAGE_BACKEND`, falling back to the in-memory store
    pub fn from_env() -> Self {
        let backend = std::env::var("STORAGE_BACKEND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self { backend }
    }
}
