//! PostgreSQL database connector
//!
//! Connection management with pool configuration and retry. Readiness
//! probes ping through the returned [`DatabaseConnection`] directly.

mod config;
mod connector;

pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
};

// Callers get the SeaORM handle types without a direct sea-orm dependency
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
