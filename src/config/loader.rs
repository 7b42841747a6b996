//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file and layering environment overrides on top.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ServiceError, ServiceResult};

use super::types::ServiceConfig;

/// Environment variable overriding `server.host`.
pub const ENV_HOST: &str = "APP_HOST";

/// Environment variable overriding `server.port`.
pub const ENV_PORT: &str = "APP_PORT";

/// Environment variable overriding `telemetry.log_level`.
pub const ENV_LOG_LEVEL: &str = "APP_LOG_LEVEL";

/// Loads and provides access to the service configuration.
///
/// Configuration is resolved in layers: built-in defaults, then an optional
/// YAML file, then environment variables. Command line flags are applied by
/// the binary after loading.
///
/// # File Format
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 8080
/// telemetry:
///   log_level: info
/// ```
///
/// # Example
///
/// ```no_run
/// use receipt_processor::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?.with_env_overrides()?;
/// println!("Listening on port {}", loader.config().server.port);
/// # Ok::<(), receipt_processor::error::ServiceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Creates a loader holding the built-in defaults.
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or values of the wrong type
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&path_str, &content)?;
        debug!(path = %path_str, "Loaded configuration file");
        Ok(Self { config })
    }

    /// Parses YAML configuration text. `source` names the text in errors.
    fn parse(source: &str, content: &str) -> ServiceResult<ServiceConfig> {
        // An empty file deserializes as YAML null rather than an empty mapping.
        if content.trim().is_empty() {
            return Ok(ServiceConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| ServiceError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Applies overrides from the process environment.
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn with_env_overrides(self) -> ServiceResult<Self> {
        dotenvy::dotenv().ok();
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides resolved through `lookup`.
    ///
    /// `lookup` is called with [`ENV_HOST`], [`ENV_PORT`] and
    /// [`ENV_LOG_LEVEL`]; keys it returns `None` for are left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use receipt_processor::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::defaults()
    ///     .with_overrides(|key| (key == "APP_PORT").then(|| "9090".to_string()))
    ///     .unwrap();
    /// assert_eq!(loader.config().server.port, 9090);
    /// ```
    pub fn with_overrides<F>(mut self, lookup: F) -> ServiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.config.server.host = host;
        }

        if let Some(port) = lookup(ENV_PORT) {
            self.config.server.port =
                port.trim()
                    .parse::<u16>()
                    .map_err(|_| ServiceError::InvalidConfig {
                        key: ENV_PORT.to_string(),
                        message: format!("'{}' is not a valid port", port),
                    })?;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.config.telemetry.log_level = log_level;
        }

        Ok(self)
    }

    /// Returns the resolved configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader and returns the resolved configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}
