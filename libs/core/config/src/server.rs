use crate::{ConfigError, FromEnv, env_or_default};
use std::net::Ipv4Addr;

const DEFAULT_PORT: u16 = 8080;

/// Listen address for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The bind address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads `HOST` (default 0.0.0.0, all interfaces) and `PORT`
    /// (default 8080).
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = env_or_default("HOST", &defaults.host);
        let port = env_or_default("PORT", &defaults.port.to_string())
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::ParseError {
                key: "PORT".to_owned(),
                details: e.to_string(),
            })?;

        Ok(Self::new(host, port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), DEFAULT_PORT)
    }
}
