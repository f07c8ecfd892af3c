//! MongoDB implementation of ServiceRepository

use async_trait::async_trait;
use database::mongodb::is_duplicate_key;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, to_bson},
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Service, ServiceFields};
use crate::repository::ServiceRepository;

pub const COLLECTION: &str = "services";

const CODE_INDEX: &str = "idx_code_unique";

pub struct MongoServiceRepository {
    collection: Collection<Service>,
}

impl MongoServiceRepository {
    /// ```ignore
    /// let db = client.database("servicios");
    /// let repo = MongoServiceRepository::new(db);
    /// repo.init_indexes().await?;
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Service>(collection_name),
        }
    }

    /// Creates the unique index on `code`. Safe to run on every start.
    #[instrument(skip(self))]
    pub async fn init_indexes(&self) -> ServiceResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(
                IndexOptions::builder()
                    .name(CODE_INDEX.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!(index = CODE_INDEX, "Service indexes ready");
        Ok(())
    }

    fn by_code(code: &str) -> Document {
        doc! { "code": code }
    }

    fn set_fields(fields: &ServiceFields) -> ServiceResult<Document> {
        Ok(doc! {
            "$set": {
                "application": to_bson(&fields.application)?,
                "service_name": fields.service_name.as_str(),
                "price": fields.price.as_str(),
            }
        })
    }
}

#[async_trait]
impl ServiceRepository for MongoServiceRepository {
    #[instrument(skip(self, service), fields(code = %service.code))]
    async fn insert(&self, service: Service) -> ServiceResult<Service> {
        match self.collection.insert_one(&service).await {
            Ok(_) => {
                tracing::info!(service_id = %service.id, "Service created successfully");
                Ok(service)
            }
            Err(e) if is_duplicate_key(&e) => Err(ServiceError::AlreadyExists(service.code)),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> ServiceResult<Option<Service>> {
        Ok(self.collection.find_one(Self::by_code(code)).await?)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ServiceResult<Vec<Service>> {
        let cursor = self.collection.find(doc! {}).await?;
        let services: Vec<Service> = cursor.try_collect().await?;
        Ok(services)
    }

    #[instrument(skip(self, fields))]
    async fn update_fields(&self, code: &str, fields: &ServiceFields) -> ServiceResult<bool> {
        let result = self
            .collection
            .update_one(Self::by_code(code), Self::set_fields(fields)?)
            .await?;

        if result.matched_count > 0 {
            tracing::info!(code, "Service updated successfully");
        }
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete_by_code(&self, code: &str) -> ServiceResult<bool> {
        let result = self.collection.delete_one(Self::by_code(code)).await?;

        if result.deleted_count > 0 {
            tracing::info!(code, "Service deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}
