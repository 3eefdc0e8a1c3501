//! Store port and adapters.
//!
//! # Data Flow
//! ```text
//! recorder
//!     → RecordStore (port trait)
//!         → redis.rs (production adapter, managed KV service)
//!         → memory.rs (in-memory adapter for tests)
//! ```
//!
//! # Design Decisions
//! - One trait seam between the demo logic and the store client
//! - Keys carry a project namespace so demos never collide across projects
//! - Every error is terminal for the caller; the store layer never retries

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::record::Record;

pub mod memory;
pub mod redis;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

/// Collection every record is written under.
pub const COLLECTION: &str = "entity_k8snovice";

/// Errors that can occur against the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store client construction or connection failed.
    #[error("failed to connect to store: {0}")]
    Connect(String),

    /// Persisting a record failed.
    #[error("failed to write record {key}: {reason}")]
    Write { key: String, reason: String },

    /// Reading a record back failed.
    #[error("failed to read record {key}: {reason}")]
    Read { key: String, reason: String },

    /// The record was not found on read-back.
    #[error("record {key} missing after write")]
    Missing { key: String },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Port for the external durable store.
///
/// Records are write-once: `put` is never called twice with the same id.
#[async_trait]
pub trait RecordStore {
    /// Persist `record` under `id`.
    async fn put(&mut self, id: Uuid, record: &Record) -> StoreResult<()>;

    /// Fetch the record stored under `id`.
    async fn get(&mut self, id: Uuid) -> StoreResult<Record>;
}
