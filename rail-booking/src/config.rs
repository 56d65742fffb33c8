//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "RAIL_BOOKING_ADDR";

/// Error returned for an unparsable listen address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid RAIL_BOOKING_ADDR {value:?}: expected host:port")]
pub struct ConfigError {
    value: String,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Create a configuration listening on `addr`.
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Read the listen address from `RAIL_BOOKING_ADDR`, falling back to
    /// the default when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(ADDR_VAR).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            None => Ok(Self::default()),
            Some(v) => v.parse().map(Self::new).map_err(|_| ConfigError {
                value: v.to_string(),
            }),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(ServerConfig::default().addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn unset_uses_default() {
        let config = ServerConfig::from_value(None).unwrap();
        assert_eq!(config.addr, ServerConfig::default().addr);
    }

    #[test]
    fn parses_address() {
        let config = ServerConfig::from_value(Some("0.0.0.0:8080")).unwrap();
        assert_eq!(config.addr.port(), 8080);
    }

    #[test]
    fn rejects_garbage() {
        let err = ServerConfig::from_value(Some("localhost")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid RAIL_BOOKING_ADDR \"localhost\": expected host:port"
        );
    }
}
