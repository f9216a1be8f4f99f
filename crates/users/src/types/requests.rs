//! Request types for the registration workflow

use serde::{Deserialize, Serialize};

/// A submitted registration form.
///
/// Fields default to empty strings when missing from the submission, so the
/// required-field checks report them instead of the deserializer rejecting
/// the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password2: String,
}
