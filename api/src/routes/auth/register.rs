use actix_web::{web, HttpResponse};
use sb_core::repositories::AccountRepository;
use validator::Validate;

use crate::dto::{Envelope, RegisterRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/register
///
/// # Request Body
///
/// ```json
/// { "name": "Ana", "email": "ana@x.com", "password": "pw1" }
/// ```
///
/// The same fields wrapped under `"user"` are accepted too.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "id": 1, "name": "Ana", "email": "ana@x.com", "score": 0 }
/// ```
///
/// ## Errors
/// - 400 a field is missing, blank or too long
/// - 409 the email is already registered
/// - 503 the account store is unreachable
pub async fn register<R>(
    state: web::Data<AppState<R>>,
    body: web::Json<Envelope<RegisterRequest>>,
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
        .register(&request.name, &request.email, &request.password)
        .await
    {
        Ok(account) => HttpResponse::Created().json(account),
        Err(error) => handle_domain_error(error),
    }
}
