//! Error types for the database layer

use thiserror::Error;

/// General database error
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database query error: {0}")]
    QueryError(String),

    #[error("Database migration error: {0}")]
    MigrationError(String),
}

/// User-specific database errors
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    UserNotFound,

    #[error("The username is already taken")]
    UsernameAlreadyTaken,

    #[error("Password hashing failed")]
    PasswordHashingFailed,

    #[error("Invalid password hash")]
    InvalidPasswordHash,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Convert database errors to our error types
impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => UserError::UserNotFound,
            sqlx::Error::Database(db_err) => {
                if db_err.message().contains("UNIQUE constraint failed")
                    && db_err.message().contains("username")
                {
                    UserError::UsernameAlreadyTaken
                } else {
                    UserError::DatabaseError(db_err.message().to_string())
                }
            }
            _ => UserError::DatabaseError(err.to_string()),
        }
    }
}
