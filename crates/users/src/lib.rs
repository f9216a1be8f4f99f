//! # MiniTwit Users Crate
//!
//! This crate provides the registration workflow for the MiniTwit backend:
//! form validation, username uniqueness, password hashing, and persistence
//! of new user records through the database crate's repositories.
//!
//! ## Architecture
//!
//! - **Services**: the registration workflow, generic over a user store
//! - **Types**: request, outcome, and field-error types
//! - **Utils**: validation and password hashing

pub mod services;
pub mod types;
pub mod utils;

// Re-export database types and repositories
pub use minitwit_database::{NewUser, User, UserError, UserRepository, UserResult};

// Re-export main types for convenience
pub use services::{RegistrationService, UserStore, LOGIN_PAGE};
pub use types::{field, FieldErrors, RegisterOutcome, RegisterRequest};
pub use utils::{hash_password, verify_password};
