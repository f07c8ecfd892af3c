//! User registration - hashing and validation over the repository

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Stores a user with a freshly salted hash of `input.password`.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let password_hash = hash_password(&input.password)?;
        let user = User::new(input.username, input.email, password_hash);

        self.repository.insert(user).await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

/// Checks `password` against a stored PHC hash string.
///
/// A malformed hash is an error; a wrong password is `Ok(false)`.
pub fn verify_password(password: &str, password_hash: &str) -> UserResult<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| UserError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;

    fn input(username: &str, password: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_stores_hash_not_password() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_insert()
            .withf(|user| user.username == "ana" && user.password_hash != "s3cret")
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(mock_repo);
        let user = service.create(input("ana", "s3cret")).await.unwrap();

        assert!(user.password_hash.starts_with("$argon2"));
        assert!(verify_password("s3cret", &user.password_hash).unwrap());
        assert!(!verify_password("wrong", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_fields_before_insert() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_insert().never();

        let service = UserService::new(mock_repo);
        let result = service.create(input("ana", "")).await;

        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_passes_repository_error_through() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(UserError::Database("connection reset".into())));

        let service = UserService::new(mock_repo);
        assert!(matches!(
            service.list().await,
            Err(UserError::Database(_))
        ));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = hash_password("s3cret").unwrap();
        let second = hash_password("s3cret").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("s3cret", &first).unwrap());
        assert!(verify_password("s3cret", &second).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(matches!(
            verify_password("s3cret", "not-a-phc-string"),
            Err(UserError::PasswordHash(_))
        ));
    }
}
