//! User management domain: validation, password hashing, persistence and
//! the HTTP handlers for the `users` table.
//!
//! Layers, top to bottom:
//!
//! ```text
//! handlers -> UserService -> PgUserRepository -> entity
//! ```
//!
//! `handlers` exposes the Axum router and OpenAPI paths. `UserService`
//! owns the business rules: name validation (Latin or Cyrillic letters
//! and hyphens), Argon2 hashing, the empty-update rejection, and one
//! transaction per operation. `PgUserRepository` issues the sea-orm
//! statements, and `entity` maps the table itself.
//!
//! ```rust,no_run
//! use domain_users::{UserService, handlers};
//! use sea_orm::DatabaseConnection;
//!
//! let db = DatabaseConnection::default();
//! let router = handlers::router(UserService::new(db));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod service;

pub use error::{UserError, UserResult};
pub use models::{CreateUser, DeletedUserResponse, UpdateUser, User, UserResponse};
pub use postgres::PgUserRepository;
pub use service::UserService;
