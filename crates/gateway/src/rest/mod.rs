//! REST API endpoints for the gateway

pub mod health;
pub mod login;
pub mod register;

use crate::state::GatewayState;
use axum::Router;

/// Create all REST API routes
pub fn create_rest_routes() -> Router<GatewayState> {
    Router::new()
        .route("/health", axum::routing::get(health::health_check))
        .merge(register::create_register_routes())
        .merge(login::create_login_routes())
}

// Re-export for convenience
pub use login::LoginPageResponse;
pub use register::{ValidationErrorResponse, FLASH_COOKIE};
