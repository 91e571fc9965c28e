use actix_web::{web, HttpResponse};
use sb_core::repositories::AccountRepository;

use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/accounts
///
/// Every account as `{ "name", "email", "score" }`, highest score first.
pub async fn list_accounts<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    match state.account_service.list_ranked().await {
        Ok(accounts) => HttpResponse::Ok().json(accounts),
        Err(error) => handle_domain_error(error),
    }
}
