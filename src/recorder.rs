//! The recorder component.
//!
//! # Responsibilities
//! - Build one record per activation and persist it
//! - Confirm persistence by reading the record back
//! - Drive the unbounded looping mode with a fixed pause
//!
//! # Design Decisions
//! - The RNG is seeded once for the process lifetime and injected here,
//!   never reseeded per pick
//! - The store connection is owned by the recorder and shared across loop
//!   iterations
//! - Any store error is propagated unchanged; there is no retry path

use std::time::Duration;

use chrono_tz::Tz;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::record::Record;
use crate::store::{RecordStore, StoreResult};

/// Produces and persists greeting records against an injected store.
pub struct GreetingRecorder<S> {
    store: S,
    zone: Tz,
    rng: StdRng,
}

impl<S: RecordStore> GreetingRecorder<S> {
    /// Create a recorder over an already-connected store.
    pub fn new(store: S, zone: Tz, rng: StdRng) -> Self {
        Self { store, zone, rng }
    }

    /// Write one record under a fresh id, read it back, and return it.
    ///
    /// The returned record is the fetched copy, so the caller sees exactly
    /// what the store persisted.
    pub async fn record_once(&mut self) -> StoreResult<Record> {
        let id = Uuid::new_v4();
        let record = Record::greeting(&mut self.rng, self.zone);

        self.store.put(id, &record).await?;
        let fetched = self.store.get(id).await?;

        tracing::info!(
            %id,
            value = %fetched.value,
            created_at = %fetched.created_at,
            "fetched record"
        );
        Ok(fetched)
    }

    /// Run `record_once` forever, pausing `interval` between iterations.
    ///
    /// Returns only on error, which is fatal to the caller.
    pub async fn run_forever(&mut self, interval: Duration) -> StoreResult<()> {
        loop {
            self.record_once().await?;
            tokio::time::sleep(interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EMOJIS;
    use crate::store::memory::{MemoryStore, Op};
    use rand::SeedableRng;

    fn recorder(store: MemoryStore) -> GreetingRecorder<MemoryStore> {
        GreetingRecorder::new(store, chrono_tz::Asia::Tokyo, StdRng::seed_from_u64(42))
    }

    #[tokio::test]
    async fn test_single_run_writes_then_reads_same_key() {
        let store = MemoryStore::new();
        let mut rec = recorder(store.clone());

        let record = rec.record_once().await.unwrap();

        let ops = store.ops();
        assert_eq!(ops.len(), 2);
        let Op::Put(put_id) = ops[0] else {
            panic!("first op should be a put");
        };
        assert_eq!(ops[1], Op::Get(put_id));

        let suffix = record.value.strip_prefix("Hi! Kubernetes Novice ").unwrap();
        assert!(EMOJIS.contains(&suffix));
    }

    #[tokio::test]
    async fn test_round_trip_returns_what_was_written() {
        let store = MemoryStore::new();
        let mut rec = recorder(store.clone());

        let fetched = rec.record_once().await.unwrap();
        assert_eq!(store.records(), vec![fetched]);
    }

    #[tokio::test]
    async fn test_successive_runs_use_distinct_keys() {
        let store = MemoryStore::new();
        let mut rec = recorder(store.clone());

        rec.record_once().await.unwrap();
        rec.record_once().await.unwrap();

        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_timestamps_non_decreasing_across_runs() {
        let store = MemoryStore::new();
        let mut rec = recorder(store.clone());

        let first = rec.record_once().await.unwrap();
        let second = rec.record_once().await.unwrap();
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn test_write_failure_leaves_no_partial_state() {
        let store = MemoryStore::new();
        store.fail_puts();
        let mut rec = recorder(store.clone());

        let err = rec.record_once().await.unwrap_err();
        assert!(err.to_string().contains("failed to write"));
        assert!(store.is_empty());
        // Nothing was retried: no operation ever landed.
        assert!(store.ops().is_empty());
    }
}
