use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use sb_core::repositories::AccountRepository;
use sb_shared::types::{HealthResponse, HealthStatus, ServiceHealth};

use crate::routes::AppState;

/// Handler for GET /health
///
/// Reports the account store backend and whether it answers. Responds 503
/// when the store does not.
pub async fn health_check<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    let repository = state.account_service.repository();
    let backend = repository.backend_name();

    let storage = match repository.health_check().await {
        Ok(()) => ServiceHealth::healthy(backend),
        Err(error) => {
            tracing::warn!("Health check: {} store unreachable: {}", backend, error);
            ServiceHealth::unhealthy(format!("{} store unreachable", backend))
        }
    };

    let mut services = HashMap::new();
    services.insert("storage".to_string(), storage);
    let response = HealthResponse::from_services(env!("CARGO_PKG_VERSION"), services);

    match response.status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(response),
        _ => HttpResponse::Ok().json(response),
    }
}
