//! User repository for database operations.

use crate::entities::{NewUser, User};
use crate::types::{UserError, UserResult};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

fn row_to_user(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_user))
    }

    /// Find user by username
    ///
    /// Username comparison is case-sensitive (SQLite BINARY collation).
    pub async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_user))
    }

    /// Insert a new user and commit the transaction.
    ///
    /// A UNIQUE violation on `users.username` surfaces as
    /// [`UserError::UsernameAlreadyTaken`]; the commit is all-or-nothing, so a
    /// rejected write leaves no partial row behind.
    pub async fn create(&self, new_user: &NewUser) -> UserResult<User> {
        let now = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO users (username, email, password_hash, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        let user_id = result.last_insert_rowid();
        tx.commit().await?;

        self.find_by_id(user_id)
            .await?
            .ok_or_else(|| UserError::DatabaseError("failed to retrieve created user".to_string()))
    }

    /// Get user count
    pub async fn count(&self) -> UserResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
