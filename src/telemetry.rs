//! Logging initialisation.
//!
//! Installs a `tracing-subscriber` formatter. `RUST_LOG` takes precedence
//! over the configured log level when it is set.

use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;
use crate::error::{ServiceError, ServiceResult};

/// Builds the event filter for the given configuration.
pub fn env_filter(config: &TelemetryConfig) -> ServiceResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| ServiceError::InvalidConfig {
                key: "telemetry.log_level".to_string(),
                message: format!("'{}' is not a valid filter: {}", config.log_level, source),
            })
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Fails if the log level is not a valid filter directive or if a global
/// subscriber has already been installed.
pub fn init(config: &TelemetryConfig) -> ServiceResult<()> {
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| ServiceError::TelemetryInit {
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_log_level_builds_filter() {
        let config = TelemetryConfig {
            log_level: "receipt_processor=debug,info".to_string(),
        };
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        let config = TelemetryConfig {
            log_level: "receipt_processor=loudest".to_string(),
        };
        let error = env_filter(&config).unwrap_err();
        assert!(error.to_string().contains("telemetry.log_level"));
    }
}
