//! HTTP adapter - REST API exposure of the scoring engine.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::{api_routes, app_router};
