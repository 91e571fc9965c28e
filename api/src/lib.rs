//! HTTP boundary of the scoreboard backend
//!
//! Library exports for testing and for the `sb_api` binary.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use app::create_app;
pub use routes::AppState;
pub use server::run_server;
