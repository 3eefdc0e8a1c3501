//! Greeting Recorder Library
//!
//! Writes a randomly chosen emoji greeting plus a timestamp to an external
//! key-value store, reads it back, and reports the result. Three binaries
//! share this library: a single-shot run, an unbounded loop, and a traced
//! run exporting spans to an OTLP collector.

pub mod config;
pub mod observability;
pub mod record;
pub mod recorder;
pub mod store;

pub use config::AppConfig;
pub use record::Record;
pub use recorder::GreetingRecorder;
pub use store::RecordStore;
