//! HTTP server bootstrap

use std::sync::Arc;

use actix_web::{web, HttpServer};
use sb_core::repositories::AccountRepository;
use sb_shared::config::AppConfig;

use crate::app::create_app;
use crate::routes::AppState;

/// Serve the API on the configured address until shutdown
pub async fn run_server<R>(config: &AppConfig, repository: Arc<R>) -> std::io::Result<()>
where
    R: AccountRepository + 'static,
{
    let backend = repository.backend_name();
    let app_state = web::Data::new(AppState::new(repository));
    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;
    let bind_address = config.server.bind_address();

    tracing::info!(
        "Starting scoreboard API on {} ({} environment, {} store)",
        bind_address,
        config.environment,
        backend
    );

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &cors, max_payload_size)
    })
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
