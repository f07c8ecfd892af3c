//! Servicios Domain
//!
//! CRUD over the `services` collection, addressed by business `code`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Catalog   │  ← Validation, existence rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + MongoDB and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_servicios::{handlers, MongoServiceRepository, ServiceCatalog};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoServiceRepository::new(client.database("servicios"));
//! repository.init_indexes().await?;
//!
//! let router = handlers::router(ServiceCatalog::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ServiceError, ServiceResult};
pub use handlers::ApiDoc;
pub use models::{
    Application, CreateService, DeletedService, Service, ServiceFields, ServiceList,
    ServiceUpdate, UpdateService,
};
pub use crate::mongodb::MongoServiceRepository;
pub use repository::{InMemoryServiceRepository, ServiceRepository};
pub use service::ServiceCatalog;
