//! Service catalog - business rules over the repository

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{CreateService, Service, ServiceFields, ServiceUpdate, UpdateService};
use crate::repository::ServiceRepository;

pub struct ServiceCatalog<R: ServiceRepository> {
    repository: Arc<R>,
}

impl<R: ServiceRepository> ServiceCatalog<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<Service>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, code: &str) -> ServiceResult<Service> {
        let code = require_code(code)?;
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::NotFound(code.to_string()))
    }

    /// Inserts a new record.
    ///
    /// The lookup gives the usual answer for an existing code; the store's
    /// unique index settles concurrent creates of the same code.
    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create(&self, input: CreateService) -> ServiceResult<Service> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        if self.repository.find_by_code(&input.code).await?.is_some() {
            return Err(ServiceError::AlreadyExists(input.code));
        }

        self.repository.insert(Service::new(input)).await
    }

    /// Replaces the three value fields and reports old and new values.
    #[instrument(skip(self, input))]
    pub async fn update(&self, code: &str, input: UpdateService) -> ServiceResult<ServiceUpdate> {
        let code = require_code(code)?;
        input
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let before = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::NotFound(code.to_string()))?;

        let fields = ServiceFields::from(input);
        if !self.repository.update_fields(code, &fields).await? {
            // deleted between the read and the write
            return Err(ServiceError::NotFound(code.to_string()));
        }

        Ok(ServiceUpdate {
            id: before.id,
            code: before.code.clone(),
            service_old: before.fields(),
            service_new: fields,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, code: &str) -> ServiceResult<()> {
        let code = require_code(code)?;
        if self.repository.delete_by_code(code).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(code.to_string()))
        }
    }
}

impl<R: ServiceRepository> Clone for ServiceCatalog<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Same rule as `CreateService::code`: any non-empty string.
fn require_code(code: &str) -> ServiceResult<&str> {
    if code.is_empty() {
        Err(ServiceError::Validation("code must not be empty".to_string()))
    } else {
        Ok(code)
    }
}
