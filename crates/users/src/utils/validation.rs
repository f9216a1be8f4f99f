//! Input validation for the registration form.

use crate::types::{field, FieldErrors, RegisterRequest};
use regex::Regex;

/// Maximum username length, in characters
pub const MAX_USERNAME_LEN: usize = 16;
/// Maximum email length, in characters
pub const MAX_EMAIL_LEN: usize = 32;
/// Maximum password length, in characters
pub const MAX_PASSWORD_LEN: usize = 32;

/// Validate every field of a registration form.
///
/// All four fields are checked; each failing field contributes its first
/// failing check's message. No field short-circuits validation of another.
pub fn validate_registration(form: &RegisterRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Err(message) = validate_username(&form.username) {
        errors.add(field::USERNAME, message);
    }
    if let Err(message) = validate_email(&form.email) {
        errors.add(field::EMAIL, message);
    }
    if let Err(message) = validate_password(&form.password) {
        errors.add(field::PASSWORD, message);
    }
    if let Err(message) = validate_password_confirmation(&form.password, &form.password2) {
        errors.add(field::PASSWORD2, message);
    }

    errors
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("You have to enter a username".to_string());
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(format!(
            "Username must be at most {MAX_USERNAME_LEN} characters long"
        ));
    }

    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("You have to enter a valid email address".to_string());
    }

    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(format!(
            "Email must be at most {MAX_EMAIL_LEN} characters long"
        ));
    }

    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .map_err(|_| "You have to enter a valid email address".to_string())?;

    if !email_regex.is_match(email) {
        return Err("You have to enter a valid email address".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("You have to enter a password".to_string());
    }

    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(format!(
            "Password must be at most {MAX_PASSWORD_LEN} characters long"
        ));
    }

    Ok(())
}

/// Validate the password confirmation field
pub fn validate_password_confirmation(password: &str, password2: &str) -> Result<(), String> {
    if password2.is_empty() {
        return Err("Please confirm your password".to_string());
    }

    if password2.chars().count() > MAX_PASSWORD_LEN {
        return Err(format!(
            "Password must be at most {MAX_PASSWORD_LEN} characters long"
        ));
    }

    if password2 != password {
        return Err("The two passwords do not match".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterRequest {
        RegisterRequest {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "secret12".to_string(),
            password2: "secret12".to_string(),
        }
    }

    #[test]
    fn test_username_validation() {
        assert!(validate_username("bob").is_ok());
        assert!(validate_username(&"a".repeat(16)).is_ok());

        assert_eq!(
            validate_username(""),
            Err("You have to enter a username".to_string())
        );
        assert!(validate_username(&"a".repeat(17)).is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name+tag@domain.co").is_ok());

        assert_eq!(
            validate_email(""),
            Err("You have to enter a valid email address".to_string())
        );
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("test@").is_err());
        // 33 characters, syntactically fine otherwise
        assert!(validate_email(&format!("{}@example.com", "a".repeat(21))).is_err());
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret12").is_ok());

        assert_eq!(
            validate_password(""),
            Err("You have to enter a password".to_string())
        );
        assert!(validate_password(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_password_confirmation_validation() {
        assert!(validate_password_confirmation("secret12", "secret12").is_ok());

        assert_eq!(
            validate_password_confirmation("secret12", ""),
            Err("Please confirm your password".to_string())
        );
        assert_eq!(
            validate_password_confirmation("secret12", "secret13"),
            Err("The two passwords do not match".to_string())
        );
    }

    #[test]
    fn test_length_limits_count_characters_not_bytes() {
        // 16 two-byte characters stay within the username limit
        assert!(validate_username(&"ü".repeat(16)).is_ok());
        assert!(validate_username(&"ü".repeat(17)).is_err());
    }

    #[test]
    fn test_all_fields_reported_together() {
        let errors = validate_registration(&RegisterRequest::default());

        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(crate::types::field::USERNAME),
            Some("You have to enter a username")
        );
        assert_eq!(
            errors.get(crate::types::field::EMAIL),
            Some("You have to enter a valid email address")
        );
        assert_eq!(
            errors.get(crate::types::field::PASSWORD),
            Some("You have to enter a password")
        );
        assert_eq!(
            errors.get(crate::types::field::PASSWORD2),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_mismatch_reported_regardless_of_other_fields() {
        let mut form = valid_form();
        form.username = String::new();
        form.password2 = "different".to_string();

        let errors = validate_registration(&form);
        assert_eq!(
            errors.get(crate::types::field::PASSWORD2),
            Some("The two passwords do not match")
        );
        assert_eq!(
            errors.get(crate::types::field::USERNAME),
            Some("You have to enter a username")
        );
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_registration(&valid_form()).is_empty());
    }
}
