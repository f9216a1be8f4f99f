//! Follower repository for database operations.

use crate::entities::Follower;
use crate::types::UserResult;
use sqlx::SqlitePool;

/// Repository for follower relationship operations
#[derive(Clone)]
pub struct FollowerRepository {
    pool: SqlitePool,
}

impl FollowerRepository {
    /// Create a new follower repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a follow relationship and commit the transaction
    pub async fn create(&self, follower: &Follower) -> UserResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO followers (follower_id, followee_id) VALUES (?, ?)")
            .bind(follower.follower_id)
            .bind(follower.followee_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Check whether a follow relationship exists
    pub async fn exists(&self, follower_id: i64, followee_id: i64) -> UserResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM followers WHERE follower_id = ? AND followee_id = ?",
        )
        .bind(follower_id)
        .bind(followee_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Get follower relationship count
    pub async fn count(&self) -> UserResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM followers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::NewUser;
    use crate::repos::UserRepository;
    use crate::{prepare_database, run_migrations};
    use minitwit_config::DatabaseConfig;
    use tempfile::TempDir;

    async fn create_test_pool() -> (SqlitePool, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let config = DatabaseConfig {
            url: format!("sqlite://{}", db_path.display()),
            max_connections: 1,
        };

        let pool = prepare_database(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (pool, temp_dir)
    }

    async fn create_user(pool: &SqlitePool, username: &str) -> i64 {
        let users = UserRepository::new(pool.clone());
        let user = users
            .create(&NewUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        user.id
    }

    #[tokio::test]
    async fn test_follow_relationship_roundtrip() {
        let (pool, _temp_dir) = create_test_pool().await;
        let alice = create_user(&pool, "alice").await;
        let bob = create_user(&pool, "bob").await;
        let repo = FollowerRepository::new(pool);

        assert!(!repo.exists(alice, bob).await.unwrap());

        repo.create(&Follower {
            follower_id: alice,
            followee_id: bob,
        })
        .await
        .unwrap();

        assert!(repo.exists(alice, bob).await.unwrap());
        // Direction matters.
        assert!(!repo.exists(bob, alice).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
