//! Follower entity definitions

use serde::{Deserialize, Serialize};

/// A directed "follows" relationship between two users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follower {
    pub follower_id: i64,
    pub followee_id: i64,
}
