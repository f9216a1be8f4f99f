//! Mock repository implementations for testing core service functionality

use minitwit_database::{NewUser, User, UserError, UserResult};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory user store for testing.
///
/// Mirrors the real repository's contract: `find_by_username` never errors
/// for "not found", and `create` rejects a duplicate username with
/// [`UserError::UsernameAlreadyTaken`].
#[derive(Clone)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: Arc<RwLock<i64>>,
    reserved: Arc<RwLock<HashSet<String>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
            reserved: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    pub async fn create(&self, new_user: &NewUser) -> UserResult<User> {
        if self.reserved.read().await.contains(&new_user.username) {
            return Err(UserError::UsernameAlreadyTaken);
        }

        let mut users = self.users.write().await;
        if users.values().any(|u| u.username == new_user.username) {
            return Err(UserError::UsernameAlreadyTaken);
        }

        let mut next_id = self.next_id.write().await;
        let user_id = *next_id;
        *next_id += 1;

        let user = User {
            id: user_id,
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        users.insert(user_id, user.clone());
        Ok(user)
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Make `create` reject this username while `find_by_username` still
    /// reports it absent, simulating a row committed by a concurrent request
    /// between the uniqueness pre-check and the insert.
    pub async fn reserve_username(&self, username: &str) {
        self.reserved.write().await.insert(username.to_string());
    }
}
