//! Route wiring for the binary

pub mod catalog;
pub mod health;
pub mod servicios;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Every application route, mounted at the root by `create_router`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(catalog::router())
        .merge(servicios::router(state))
        .merge(users::router(state))
        .merge(health::router(state.clone()))
}
