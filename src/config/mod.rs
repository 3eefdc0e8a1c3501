//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read & parse env vars)
//!     → semantic checks (time zone must name a known IANA zone)
//!     → AppConfig (validated, immutable)
//!     → shared by the binaries
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Every knob except PROJECT_ID has a default so the demo runs locally
//! - An unknown time zone fails startup instead of being silently ignored

pub mod loader;
pub mod schema;

pub use schema::AppConfig;
pub use schema::StoreConfig;
pub use schema::TelemetryConfig;

pub use loader::ConfigError;
