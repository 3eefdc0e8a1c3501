//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! recorder. All values come from the process environment; see
//! [`loader`](crate::config::loader) for the variable names.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Root configuration for the recorder.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Project identifier namespacing every store key.
    pub project_id: String,

    /// Store connection settings.
    pub store: StoreConfig,

    /// Time zone records are stamped in.
    pub time_zone: Tz,

    /// Telemetry export settings (traced binary only).
    pub telemetry: TelemetryConfig,
}

/// Store connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Store connection URL (e.g., "redis://127.0.0.1/").
    pub url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1/".to_string(),
        }
    }
}

/// Telemetry export configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// OTLP collector endpoint (gRPC).
    pub otlp_endpoint: String,

    /// Service name attached to every exported span.
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: "http://localhost:4317".to_string(),
            service_name: "greeting-recorder".to_string(),
        }
    }
}
