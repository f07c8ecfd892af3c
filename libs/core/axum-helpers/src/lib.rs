//! # Axum Helpers
//!
//! Shared HTTP plumbing for the inventory API crates.
//!
//! ## Modules
//!
//! - **[`envelope`]**: the `{message, status, ...payload}` success body
//! - **[`errors`]**: error classification and the error envelope
//! - **[`extractors`]**: validated JSON bodies
//! - **[`http`]**: CORS and security headers
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(routes)?;
//!
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {})
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use envelope::Envelope;

pub use errors::{ApiError, Classify, ErrorKind, ErrorResponse, ResultExt};

pub use extractors::ValidatedJson;

pub use http::{create_cors_layer, cors_layer_from_env, security_headers};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};
