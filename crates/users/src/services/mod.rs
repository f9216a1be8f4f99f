//! Business logic layer for the users crate

pub mod mock_repositories;
pub mod registration_service;

pub use registration_service::{RegistrationService, UserStore, LOGIN_PAGE};
