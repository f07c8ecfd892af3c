//! Server infrastructure.
//!
//! - router assembly with OpenAPI docs and the shared middleware stack
//! - liveness and readiness endpoints
//! - graceful shutdown with a bounded cleanup phase

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
