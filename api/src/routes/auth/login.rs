use actix_web::{web, HttpResponse};
use sb_core::repositories::AccountRepository;
use validator::Validate;

use crate::dto::{Envelope, LoginRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Responds 200 with `{ "id", "name", "score" }`. A wrong password and an
/// unknown email both get the same 401 body.
pub async fn login<R>(
    state: web::Data<AppState<R>>,
    body: web::Json<Envelope<LoginRequest>>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    let request = body.into_inner().into_inner();

    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .account_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(error) => handle_domain_error(error),
    }
}
