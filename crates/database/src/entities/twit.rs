//! Twit entity definitions

use serde::{Deserialize, Serialize};

/// A single posted short message authored by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Twit {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    pub created_at: String,
}

/// Insert record for a new twit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTwit {
    pub author_id: i64,
    pub text: String,
}
