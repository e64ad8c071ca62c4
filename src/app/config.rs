//! Server configuration.
//!
//! Every setting has a default, so the server runs on `0.0.0.0:8080` with no
//! environment at all. `HOST`, `PORT` and `REQUEST_TIMEOUT_SECS` override them.

use std::net::SocketAddr;
use std::time::Duration;

use crate::domain::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Loads `.env` if present, then reads overrides from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: e.to_string(),
            })?,
            None => defaults.port,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: "REQUEST_TIMEOUT_SECS".to_string(),
                        message: e.to_string(),
                    })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "REQUEST_TIMEOUT_SECS".to_string(),
                        message: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            host,
            port,
            request_timeout,
        })
    }

    /// The socket address to bind.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                key: "HOST".to_string(),
                message: e.to_string(),
            })
    }

    /// Base URL printed at startup.
    pub fn base_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
