//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! recorder produces:
//!     → logging.rs (structured log events, stdout)
//!     → telemetry.rs (spans, batched to an OTLP collector)
//! ```
//!
//! # Design Decisions
//! - Plain binaries install the fmt subscriber only
//! - The traced binary installs fmt + OpenTelemetry layers together, since
//!   a process can hold one global subscriber
//! - The exporter is flushed through a drop guard on process exit

pub mod logging;
pub mod telemetry;
