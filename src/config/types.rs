//! Configuration types for the receipt processor.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file. Every field
//! has a default so a partial file, or no file at all, is valid.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{ServiceError, ServiceResult};

/// Default address the HTTP server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Default tracing filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The host or IP address to bind to.
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Resolves the configured host and port into a socket address.
    ///
    /// `localhost` is accepted as an alias for `127.0.0.1`.
    ///
    /// # Example
    ///
    /// ```
    /// use receipt_processor::config::ServerConfig;
    ///
    /// let server = ServerConfig { host: "localhost".to_string(), port: 8080 };
    /// assert_eq!(server.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    /// ```
    pub fn socket_addr(&self) -> ServiceResult<SocketAddr> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self.host.parse().map_err(|_| ServiceError::InvalidConfig {
            key: "server.host".to_string(),
            message: format!("'{}' is not an IPv4 or IPv6 address", self.host),
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Logging controls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// The tracing filter directive (e.g., "info" or "receipt_processor=debug").
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Top-level configuration for the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub telemetry: TelemetryConfig,
}
