//! Application factory
//!
//! Builds the actix-web `App` with its middleware and routes. Generic over
//! the account store so the binary and the tests share one route table.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use sb_core::repositories::AccountRepository;
use sb_shared::config::CorsConfig;
use sb_shared::errors::{error_codes, ErrorResponse};
use tracing_actix_web::TracingLogger;

use crate::handlers::json_error_handler;
use crate::middleware::create_cors;
use crate::routes::{
    accounts::{list_accounts, update_score},
    auth::{login, register},
    health::health_check,
    AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: AccountRepository + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        // Middleware: the last one wrapped runs first
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check::<R>))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<R>))
                        .route("/login", web::post().to(login::<R>)),
                )
                .service(
                    web::scope("/accounts")
                        .route("", web::get().to(list_accounts::<R>))
                        .route("/score", web::put().to(update_score::<R>)),
                ),
        )
        // Unversioned paths kept for older clients
        .route("/", web::get().to(list_accounts::<R>))
        .route("/cadastrar", web::post().to(register::<R>))
        .route("/cadastro", web::post().to(register::<R>))
        .route("/login", web::post().to(login::<R>))
        .route("/pontuacao", web::post().to(update_score::<R>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
