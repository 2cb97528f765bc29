//! Server settings read from the environment

use std::net::SocketAddr;

use shapes::history::DEFAULT_HISTORY_LIMIT;

pub const BIND_ADDR_VAR: &str = "SHAPES_BIND_ADDR";
pub const HISTORY_LIMIT_VAR: &str = "SHAPES_HISTORY_LIMIT";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3001);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{var}: invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// Number of recent measurements kept in memory
    pub history_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Unset variables fall back to defaults,
    /// set-but-invalid ones are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| ConfigError {
                var: BIND_ADDR_VAR,
                reason: e.to_string(),
                value,
            })?;
        }

        if let Some(value) = lookup(HISTORY_LIMIT_VAR) {
            config.history_limit = value.parse().map_err(|e: std::num::ParseIntError| ConfigError {
                var: HISTORY_LIMIT_VAR,
                reason: e.to_string(),
                value,
            })?;
        }

        Ok(config)
    }
}
