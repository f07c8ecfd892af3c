use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Body area a service is performed on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum Application {
    Hands,
    Feet,
    Eyelashes,
}

/// Service record stored in the `services` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    /// Generated identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Business key, unique across the collection
    pub code: String,
    pub application: Application,
    pub service_name: String,
    /// Kept as text, the way clients send it
    pub price: String,
}

impl Service {
    pub fn new(input: CreateService) -> Self {
        Self {
            id: Uuid::now_v7(),
            code: input.code,
            application: input.application,
            service_name: input.service_name,
            price: input.price,
        }
    }

    /// The three fields an update replaces
    pub fn fields(&self) -> ServiceFields {
        ServiceFields {
            application: self.application,
            service_name: self.service_name.clone(),
            price: self.price.clone(),
        }
    }

    pub fn apply(&mut self, fields: &ServiceFields) {
        self.application = fields.application;
        self.service_name = fields.service_name.clone();
        self.price = fields.price.clone();
    }
}

/// Mutable part of a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceFields {
    pub application: Application,
    pub service_name: String,
    pub price: String,
}

/// Body of `POST /servicio`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateService {
    #[validate(length(min = 1))]
    pub code: String,
    pub application: Application,
    #[validate(length(min = 1))]
    pub service_name: String,
    #[validate(length(min = 1))]
    pub price: String,
}

/// Body of `PUT /servicio/{code}`; all three fields are required
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateService {
    pub application: Application,
    #[validate(length(min = 1))]
    pub service_name: String,
    #[validate(length(min = 1))]
    pub price: String,
}

impl From<UpdateService> for ServiceFields {
    fn from(input: UpdateService) -> Self {
        Self {
            application: input.application,
            service_name: input.service_name,
            price: input.price,
        }
    }
}

/// Outcome of an update: the values written and the ones they replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ServiceUpdate {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub code: String,
    pub service_new: ServiceFields,
    pub service_old: ServiceFields,
}

/// List payload, keyed by collection name
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceList {
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedService {
    pub code: String,
}
