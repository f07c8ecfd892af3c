//! Shared application state.

use mongodb::{Client, Database};

/// Cloned into every route module; the client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}
