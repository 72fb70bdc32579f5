//! Database connectivity for the workspace.
//!
//! The `postgres` module (default feature) wraps SeaORM connection setup:
//! pool configuration, connection with retry/backoff, and re-exports of
//! the connection types the rest of the workspace needs. The `config`
//! feature adds `core_config::FromEnv` loading for [`postgres::PostgresConfig`].

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{RetryConfig, retry, retry_with_backoff};
