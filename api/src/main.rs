use std::sync::Arc;

use anyhow::Context;
use sb_api::{run_server, telemetry};
use sb_core::repositories::InMemoryAccountRepository;
use sb_infra::{DatabasePool, MySqlAccountRepository};
use sb_shared::config::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(config.environment)?;

    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using the in-memory account store; accounts are lost on restart");
            let repository = Arc::new(InMemoryAccountRepository::new());
            run_server(&config, repository).await?;
        }
        StorageBackend::MySql => {
            let pool = DatabasePool::new(config.database.clone())
                .await
                .context("Failed to connect to the account database")?;

            if config.database.bootstrap_schema {
                pool.run_migrations()
                    .await
                    .context("Failed to bootstrap the accounts schema")?;
            }

            tracing::info!("{}", pool.get_statistics());
            let repository = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
            let result = run_server(&config, repository).await;
            pool.close().await;
            result?;
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}
