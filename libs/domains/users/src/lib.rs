//! Users Domain
//!
//! Registration and listing over the `users` collection. Passwords are
//! hashed with Argon2 and a per-user random salt before they reach storage.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, User, UserList};
pub use crate::mongodb::MongoUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::{UserService, verify_password};
