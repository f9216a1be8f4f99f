//! Twit repository for database operations.

use crate::entities::{NewTwit, Twit};
use crate::types::{UserError, UserResult};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Repository for twit database operations
#[derive(Clone)]
pub struct TwitRepository {
    pool: SqlitePool,
}

fn row_to_twit(row: &SqliteRow) -> Twit {
    Twit {
        id: row.get("id"),
        author_id: row.get("author_id"),
        text: row.get("text"),
        created_at: row.get("created_at"),
    }
}

impl TwitRepository {
    /// Create a new twit repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new twit and commit the transaction
    pub async fn create(&self, new_twit: &NewTwit) -> UserResult<Twit> {
        let now = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;

        let result =
            sqlx::query("INSERT INTO twits (author_id, text, created_at) VALUES (?, ?, ?)")
                .bind(new_twit.author_id)
                .bind(&new_twit.text)
                .bind(&now)
                .execute(&mut *tx)
                .await?;

        let twit_id = result.last_insert_rowid();
        tx.commit().await?;

        self.find_by_id(twit_id)
            .await?
            .ok_or_else(|| UserError::DatabaseError("failed to retrieve created twit".to_string()))
    }

    /// Find twit by ID
    pub async fn find_by_id(&self, id: i64) -> UserResult<Option<Twit>> {
        let row = sqlx::query("SELECT id, author_id, text, created_at FROM twits WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_twit))
    }

    /// Get twit count
    pub async fn count(&self) -> UserResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM twits")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
