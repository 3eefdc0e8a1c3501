//! Configuration loading from the process environment.
//!
//! # Variables
//! - `PROJECT_ID` (required): key namespace for the target store
//! - `STORE_URL` (default `redis://127.0.0.1/`): store connection target
//! - `TIME_ZONE` (default `Asia/Tokyo`): IANA zone name for record timestamps
//! - `OTLP_ENDPOINT` (default `http://localhost:4317`): span collector
//! - `SERVICE_NAME` (default `greeting-recorder`): span resource attribute

use std::env;

use chrono_tz::Tz;
use thiserror::Error;

use crate::config::schema::{AppConfig, StoreConfig, TelemetryConfig};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or not unicode.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// The configured time zone does not name a known IANA zone.
    #[error("unknown time zone '{0}', expected an IANA name like Asia/Tokyo")]
    InvalidTimeZone(String),
}

impl AppConfig {
    /// Load and validate configuration from the environment.
    ///
    /// The time zone is resolved here so that a bad name fails startup
    /// instead of surfacing mid-run.
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        let project_id =
            env::var("PROJECT_ID").map_err(|_| ConfigError::MissingVar("PROJECT_ID"))?;

        let store = match env::var("STORE_URL") {
            Ok(url) => StoreConfig { url },
            Err(_) => StoreConfig::default(),
        };

        let zone_name = env::var("TIME_ZONE").unwrap_or_else(|_| "Asia/Tokyo".to_string());
        let time_zone = zone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimeZone(zone_name))?;

        let mut telemetry = TelemetryConfig::default();
        if let Ok(endpoint) = env::var("OTLP_ENDPOINT") {
            telemetry.otlp_endpoint = endpoint;
        }
        if let Ok(name) = env::var("SERVICE_NAME") {
            telemetry.service_name = name;
        }

        Ok(AppConfig {
            project_id,
            store,
            time_zone,
            telemetry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_zone_is_rejected() {
        let err = "Nowhere/Special"
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimeZone("Nowhere/Special".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("Nowhere/Special"));
    }

    #[test]
    fn test_default_zone_parses() {
        assert_eq!("Asia/Tokyo".parse::<Tz>().unwrap(), chrono_tz::Asia::Tokyo);
    }
}
