use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::User;

/// Persistence for registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> UserResult<User>;

    /// Every user in store order
    async fn list(&self) -> UserResult<Vec<User>>;
}

/// In-memory implementation for tests and local runs.
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> UserResult<User> {
        self.users.write().await.push(user.clone());
        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new(name.into(), format!("{name}@example.com"), "hash".into())
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("ana")).await.unwrap();
        repo.insert(user("luis")).await.unwrap();

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["ana", "luis"]);
    }

    #[tokio::test]
    async fn test_same_username_is_stored_twice() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("ana")).await.unwrap();
        repo.insert(user("ana")).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
