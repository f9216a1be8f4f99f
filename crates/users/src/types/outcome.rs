//! Registration outcome types

use serde::Serialize;
use std::collections::BTreeMap;

/// Form field names, as submitted by the registration page
pub mod field {
    pub const USERNAME: &str = "username";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const PASSWORD2: &str = "password2";
}

/// Accumulated field-level validation errors.
///
/// Holds at most one message per field; the first failure recorded for a
/// field wins. Built and returned by the validation step as an explicit
/// value, never shared mutable state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, keeping an earlier one if present
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Navigation outcome of a registration submission.
///
/// The HTTP layer translates this into a transport-level response; the
/// workflow itself knows nothing about status codes or cookies.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// Re-present the form together with per-field error messages
    Redisplay(FieldErrors),
    /// Navigate to `target` and show `flash` on the next rendered page
    Redirect { target: String, flash: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add(field::USERNAME, "first");
        errors.add(field::USERNAME, "second");

        assert_eq!(errors.get(field::USERNAME), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_serializes_as_field_to_message_map() {
        let mut errors = FieldErrors::new();
        errors.add(field::EMAIL, "You have to enter a valid email address");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "You have to enter a valid email address"})
        );
    }
}
