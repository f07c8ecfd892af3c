use axum::Router;
use domain_servicios::{MongoServiceRepository, ServiceCatalog, handlers};
use mongodb::Database;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoServiceRepository::new(state.db.clone());
    handlers::router(ServiceCatalog::new(repository))
}

/// Unique `code` index; startup aborts when it cannot be created.
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoServiceRepository::new(db.clone())
        .init_indexes()
        .await?;
    Ok(())
}
