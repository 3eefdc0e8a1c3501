//! In-memory store adapter for tests and local dry runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::record::Record;
use crate::store::{RecordStore, StoreError, StoreResult, COLLECTION};

/// Operation observed by the store, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Put(Uuid),
    Get(Uuid),
}

#[derive(Default)]
struct Inner {
    records: HashMap<Uuid, Record>,
    ops: Vec<Op>,
    fail_puts: bool,
}

/// Shared in-memory adapter recording an operation log.
///
/// Clones share state, so a test can hand one clone to the recorder and
/// inspect the other.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `put` fail, simulating an unreachable store.
    pub fn fail_puts(&self) {
        self.inner.lock().unwrap().fail_puts = true;
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the operation log.
    pub fn ops(&self) -> Vec<Op> {
        self.inner.lock().unwrap().ops.clone()
    }

    /// Snapshot of all stored records.
    pub fn records(&self) -> Vec<Record> {
        self.inner.lock().unwrap().records.values().cloned().collect()
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryStore {
    async fn put(&mut self, id: Uuid, record: &Record) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_puts {
            return Err(StoreError::Write {
                key: format!("{}:{}", COLLECTION, id),
                reason: "store unreachable".to_string(),
            });
        }
        inner.ops.push(Op::Put(id));
        inner.records.insert(id, record.clone());
        Ok(())
    }

    async fn get(&mut self, id: Uuid) -> StoreResult<Record> {
        let mut inner = self.inner.lock().unwrap();
        inner.ops.push(Op::Get(id));
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::Missing {
                key: format!("{}:{}", COLLECTION, id),
            })
    }
}
