//! Registration workflow service.

use crate::services::mock_repositories::MemoryUserRepository;
use crate::types::{field, FieldErrors, RegisterOutcome, RegisterRequest};
use crate::utils::password::hash_password;
use crate::utils::validation::validate_registration;
use minitwit_database::{NewUser, User, UserError, UserRepository, UserResult};
use sqlx::SqlitePool;
use tracing::info;

/// Page the dispatcher navigates to after a successful registration
pub const LOGIN_PAGE: &str = "/login";

const REGISTERED_FLASH: &str = "You were successfully registered and can login now";
const USERNAME_TAKEN: &str = "The username is already taken";

/// Service turning a submitted registration form into a new user record,
/// or a set of field-level error messages.
pub struct RegistrationService<R> {
    user_repository: R,
}

impl RegistrationService<UserRepository> {
    /// Create a new registration service backed by the real database
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_repository: UserRepository::new(pool),
        }
    }
}

impl RegistrationService<MemoryUserRepository> {
    /// Create a new registration service instance for testing
    pub fn new_for_testing() -> Self {
        Self {
            user_repository: MemoryUserRepository::new(),
        }
    }
}

impl<R> RegistrationService<R>
where
    R: UserStore,
{
    /// Process one registration submission.
    ///
    /// Validation failures and a taken username resolve to
    /// [`RegisterOutcome::Redisplay`] and never escalate past this service.
    /// A store rejection other than the uniqueness constraint propagates as
    /// `Err`; the transactional insert guarantees no partial row remains.
    pub async fn register(&self, request: RegisterRequest) -> UserResult<RegisterOutcome> {
        let errors = validate_registration(&request);
        if !errors.is_empty() {
            return Ok(RegisterOutcome::Redisplay(errors));
        }

        if self
            .user_repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Ok(RegisterOutcome::Redisplay(username_taken_errors()));
        }

        let password_hash = hash_password(&request.password)?;

        let new_user = NewUser {
            username: request.username,
            email: request.email,
            password_hash,
        };

        let user = match self.user_repository.create(&new_user).await {
            Ok(user) => user,
            // Lost the check-then-act race: the store's uniqueness
            // constraint rejected the commit.
            Err(UserError::UsernameAlreadyTaken) => {
                return Ok(RegisterOutcome::Redisplay(username_taken_errors()))
            }
            Err(e) => return Err(e),
        };

        info!(username = %user.username, id = user.id, "registered new user");

        Ok(RegisterOutcome::Redirect {
            target: LOGIN_PAGE.to_string(),
            flash: REGISTERED_FLASH.to_string(),
        })
    }
}

fn username_taken_errors() -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.add(field::USERNAME, USERNAME_TAKEN);
    errors
}

/// Trait for user stores to allow generic usage
pub trait UserStore {
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>>;
    async fn create(&self, new_user: &NewUser) -> UserResult<User>;
}

impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        self.find_by_username(username).await
    }

    async fn create(&self, new_user: &NewUser) -> UserResult<User> {
        self.create(new_user).await
    }
}

impl UserStore for MemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        self.find_by_username(username).await
    }

    async fn create(&self, new_user: &NewUser) -> UserResult<User> {
        self.create(new_user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::verify_password;

    fn create_test_service() -> RegistrationService<MemoryUserRepository> {
        RegistrationService::new_for_testing()
    }

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "secret12".to_string(),
            password2: "secret12".to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_registration_redirects_to_login() {
        let service = create_test_service();

        let outcome = service.register(valid_request()).await.unwrap();

        assert_eq!(
            outcome,
            RegisterOutcome::Redirect {
                target: "/login".to_string(),
                flash: "You were successfully registered and can login now".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_registered_user_has_hashed_password() {
        let service = create_test_service();

        service.register(valid_request()).await.unwrap();

        let user = service
            .user_repository
            .find_by_username("bob")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.email, "bob@example.com");
        assert_ne!(user.password_hash, "secret12");
        assert!(verify_password("secret12", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_invalid_form_skips_the_store() {
        let service = create_test_service();
        let mut request = valid_request();
        request.username = String::new();

        let outcome = service.register(request).await.unwrap();

        match outcome {
            RegisterOutcome::Redisplay(errors) => {
                assert_eq!(
                    errors.get(field::USERNAME),
                    Some("You have to enter a username")
                );
            }
            other => panic!("expected redisplay, got {other:?}"),
        }
        assert_eq!(service.user_repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_password_mismatch_is_rejected() {
        let service = create_test_service();
        let mut request = valid_request();
        request.password2 = "secret13".to_string();

        let outcome = service.register(request).await.unwrap();

        match outcome {
            RegisterOutcome::Redisplay(errors) => {
                assert_eq!(
                    errors.get(field::PASSWORD2),
                    Some("The two passwords do not match")
                );
            }
            other => panic!("expected redisplay, got {other:?}"),
        }
        assert_eq!(service.user_repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let service = create_test_service();

        service.register(valid_request()).await.unwrap();
        let outcome = service.register(valid_request()).await.unwrap();

        match outcome {
            RegisterOutcome::Redisplay(errors) => {
                assert_eq!(
                    errors.get(field::USERNAME),
                    Some("The username is already taken")
                );
            }
            other => panic!("expected redisplay, got {other:?}"),
        }
        assert_eq!(service.user_repository.count().await, 1);
    }

    #[tokio::test]
    async fn test_lost_uniqueness_race_reads_as_duplicate() {
        // A store-level constraint rejection must be reported exactly like
        // the pre-check catching the duplicate.
        let service = create_test_service();
        service.user_repository.reserve_username("bob").await;

        let outcome = service.register(valid_request()).await.unwrap();

        match outcome {
            RegisterOutcome::Redisplay(errors) => {
                assert_eq!(
                    errors.get(field::USERNAME),
                    Some("The username is already taken")
                );
            }
            other => panic!("expected redisplay, got {other:?}"),
        }
    }
}
