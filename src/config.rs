use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::error::ConfigError;

/// Port the service listens on. Not configurable.
pub const DEFAULT_PORT: u16 = 8000;

/// Default ceiling for a request body (1 MiB).
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default time allowed for a request body to arrive (30 seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// The bind address is always `0.0.0.0:8000`. Only listener limits may be tuned:
    ///
    /// - `RPC_SUM_MAX_BODY_BYTES` (optional, default 1048576): largest accepted body
    /// - `RPC_SUM_REQUEST_TIMEOUT_SECS` (optional, default 30): max seconds to receive a body
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_body_bytes = match lookup("RPC_SUM_MAX_BODY_BYTES") {
            Some(val) => parse_positive("RPC_SUM_MAX_BODY_BYTES", &val)?,
            None => defaults.max_body_bytes,
        };

        let request_timeout = match lookup("RPC_SUM_REQUEST_TIMEOUT_SECS") {
            Some(val) => Duration::from_secs(parse_positive("RPC_SUM_REQUEST_TIMEOUT_SECS", &val)?),
            None => defaults.request_timeout,
        };

        Ok(Self {
            bind_addr: defaults.bind_addr,
            max_body_bytes,
            request_timeout,
        })
    }
}

fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match raw.trim().parse::<T>() {
        Ok(v) if v != T::default() => Ok(v),
        _ => Err(ConfigError::NotPositive {
            key,
            value: raw.to_string(),
        }),
    }
}
