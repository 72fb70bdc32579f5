use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;

// Handlers and main() match on the environment without importing core_config
pub use core_config::Environment;

/// Everything the service reads from its environment, assembled once at
/// boot from the shared config components.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            // DATABASE_URL, or assembled from DATABASE_HOST/POSTGRES_* parts
            database: PostgresConfig::from_env()?,
            // HOST (default 0.0.0.0) and PORT (default 8080)
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
