//! # MiniTwit Gateway Crate
//!
//! This crate provides the HTTP layer for the MiniTwit backend, translating
//! inbound form submissions into workflow invocations and workflow outcomes
//! back into transport-level responses (error redisplay, redirect plus flash
//! cookie).
//!
//! ## Architecture
//!
//! - **REST**: HTTP endpoints with OpenAPI annotations
//! - **State**: Shared application state holding the services
//! - **Middleware**: Request logging
//! - **Error**: Error-to-response mapping

pub mod error;
pub mod middleware;
pub mod rest;
pub mod state;

// Re-export main types for convenience
pub use error::{GatewayError, GatewayResult};
pub use state::GatewayState;

use axum::{http::Method, middleware as axum_middleware, Router};
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router with all routes
pub fn create_router(state: GatewayState) -> Router {
    Router::new()
        .merge(rest::create_rest_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .with_state(state)
}
