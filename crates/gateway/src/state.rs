//! Shared application state for the gateway

use minitwit_users::{RegistrationService, UserRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state containing all services
#[derive(Clone)]
pub struct GatewayState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Registration service
    registration_service: Arc<RegistrationService<UserRepository>>,
}

impl GatewayState {
    /// Create a new gateway state with all services initialized
    pub fn new(pool: SqlitePool) -> Self {
        let registration_service = Arc::new(RegistrationService::new(pool.clone()));
        Self {
            pool,
            registration_service,
        }
    }

    /// Get the registration service
    pub fn registration_service(&self) -> &RegistrationService<UserRepository> {
        &self.registration_service
    }
}
