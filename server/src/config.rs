//! Listener configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
    #[error("invalid PORT {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build listener config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `fallback.ip()`
    /// - `PORT`: default `fallback.port()`
    ///
    /// `fallback` is the Leptos `site_addr`, so `cargo leptos` and the
    /// binary agree on the address unless the environment overrides it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but does not parse.
    pub fn from_env(fallback: SocketAddr) -> Result<Self, ConfigError> {
        let host = parse_host(std::env::var("HOST").ok().as_deref(), fallback.ip())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref(), fallback.port())?;
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>, default: IpAddr) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidHost { value: value.to_string() }),
    }
}

fn parse_port(raw: Option<&str>, default: u16) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => match value.parse::<u16>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(ConfigError::InvalidPort { value: value.to_string() }),
        },
    }
}
