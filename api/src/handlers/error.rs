//! Conversion of domain failures into HTTP responses
//!
//! Every error body is an `ErrorResponse` from `sb_shared`. Storage and
//! internal details are logged, never sent to the client.

use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse};
use sb_core::errors::{AccountError, DomainError};
use sb_shared::errors::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Account(account_error) => handle_account_error(account_error),
        DomainError::Internal { message } => {
            tracing::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}

fn handle_account_error(error: AccountError) -> HttpResponse {
    let code = error.code();

    match error {
        AccountError::InvalidInput { ref field, .. } => {
            tracing::debug!("Rejected input: {}", error);
            let body = ErrorResponse::new(code, error.to_string()).add_detail("field", field);
            HttpResponse::BadRequest().json(body)
        }
        AccountError::DuplicateIdentity => {
            HttpResponse::Conflict().json(ErrorResponse::new(code, error.to_string()))
        }
        AccountError::InvalidCredentials => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(code, error.to_string()))
        }
        AccountError::NotFound => {
            HttpResponse::NotFound().json(ErrorResponse::new(code, error.to_string()))
        }
        AccountError::StorageUnavailable { message } => {
            tracing::error!("Account store unavailable: {}", message);
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                code,
                "The account store is temporarily unavailable. Please try again later",
            ))
        }
    }
}

/// Map `validator` failures to a 400 listing the offending fields
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut body = ErrorResponse::new(error_codes::INVALID_INPUT, "Invalid request data");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body = body.add_detail(field.to_string(), messages);
    }

    tracing::debug!("Request failed validation: {:?}", body.details);
    HttpResponse::BadRequest().json(body)
}

/// Error handler for the JSON extractor: malformed or oversized bodies
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Rejected JSON body on {}: {}", req.path(), err);

    let response = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            HttpResponse::PayloadTooLarge().json(ErrorResponse::new(
                error_codes::INVALID_INPUT,
                "Request body is too large",
            ))
        }
        _ => HttpResponse::BadRequest().json(ErrorResponse::new(
            error_codes::INVALID_INPUT,
            format!("Malformed request body: {}", err),
        )),
    };

    actix_web::error::InternalError::from_response(err, response).into()
}
