use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Service, ServiceFields};

/// Persistence for service records, addressed by business code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Stores a new record. A taken code yields `AlreadyExists`.
    async fn insert(&self, service: Service) -> ServiceResult<Service>;

    async fn find_by_code(&self, code: &str) -> ServiceResult<Option<Service>>;

    /// Every record in store order
    async fn list(&self) -> ServiceResult<Vec<Service>>;

    /// Replaces the mutable fields. `false` when no record has `code`.
    async fn update_fields(&self, code: &str, fields: &ServiceFields) -> ServiceResult<bool>;

    /// `false` when no record has `code`.
    async fn delete_by_code(&self, code: &str) -> ServiceResult<bool>;
}

/// In-memory implementation for tests and local runs.
///
/// Insertion order is preserved, like a collection scan without a sort.
#[derive(Default, Clone)]
pub struct InMemoryServiceRepository {
    services: Arc<RwLock<Vec<Service>>>,
}

impl InMemoryServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn insert(&self, service: Service) -> ServiceResult<Service> {
        let mut services = self.services.write().await;

        if services.iter().any(|s| s.code == service.code) {
            return Err(ServiceError::AlreadyExists(service.code));
        }

        services.push(service.clone());
        tracing::info!(service_id = %service.id, code = %service.code, "Created service");
        Ok(service)
    }

    async fn find_by_code(&self, code: &str) -> ServiceResult<Option<Service>> {
        let services = self.services.read().await;
        Ok(services.iter().find(|s| s.code == code).cloned())
    }

    async fn list(&self) -> ServiceResult<Vec<Service>> {
        Ok(self.services.read().await.clone())
    }

    async fn update_fields(&self, code: &str, fields: &ServiceFields) -> ServiceResult<bool> {
        let mut services = self.services.write().await;

        match services.iter_mut().find(|s| s.code == code) {
            Some(service) => {
                service.apply(fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_code(&self, code: &str) -> ServiceResult<bool> {
        let mut services = self.services.write().await;
        let before = services.len();
        services.retain(|s| s.code != code);
        Ok(services.len() < before)
    }
}
