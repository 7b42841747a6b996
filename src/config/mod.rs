//! Configuration loading and management for the receipt processor.
//!
//! This module provides functionality to load the service configuration from
//! a YAML file and the environment. Scoring rules are fixed and are not part
//! of the configuration.
//!
//! # Example
//!
//! ```no_run
//! use receipt_processor::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Binding to {}", config.config().server.host);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, ENV_HOST, ENV_LOG_LEVEL, ENV_PORT};
pub use types::{
    DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT, ServerConfig, ServiceConfig, TelemetryConfig,
};
