use actix_web::{web, HttpResponse};
use sb_core::repositories::AccountRepository;
use sb_core::services::account::validation::require_field;
use validator::Validate;

use crate::dto::{Envelope, UpdateScoreRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for PUT /api/v1/accounts/score
///
/// # Request Body
///
/// ```json
/// { "email": "ana@x.com", "score": 42 }
/// ```
///
/// `score` may also be a numeric string. The stored score is replaced,
/// whatever it was before.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "email": "ana@x.com", "finalScore": 42 }
/// ```
///
/// ## Errors
/// - 400 missing email, or a score that is not a whole number
/// - 404 no account has this email
/// - 503 the account store is unreachable
pub async fn update_score<R>(
    state: web::Data<AppState<R>>,
    body: web::Json<Envelope<UpdateScoreRequest>>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    let request = body.into_inner().into_inner();

    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    if let Err(error) = require_field("email", &request.email) {
        return handle_domain_error(error);
    }

    let score = match request.score_value() {
        Ok(score) => score,
        Err(error) => return handle_domain_error(error),
    };

    match state.account_service.update_score(&request.email, score).await {
        Ok(update) => HttpResponse::Ok().json(update),
        Err(error) => handle_domain_error(error),
    }
}
