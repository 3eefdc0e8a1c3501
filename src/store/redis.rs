//! Redis-backed store adapter.
//!
//! # Responsibilities
//! - Hold one long-lived connection for the whole process
//! - Map record ids to namespaced keys (`<project>:<collection>:<id>`)
//! - Serialize records to the JSON wire shape

use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::record::Record;
use crate::store::{RecordStore, StoreError, StoreResult, COLLECTION};

/// Production adapter over a managed key-value service.
///
/// `ConnectionManager` multiplexes one connection and reconnects on failure,
/// so the looping binary shares a single instance across iterations.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    prefix: String,
}

impl RedisStore {
    /// Connect to the store named by the configuration.
    ///
    /// Failure here is terminal: the caller is expected to exit.
    pub async fn connect(config: &AppConfig) -> StoreResult<Self> {
        let client = redis::Client::open(config.store.url.as_str())
            .map_err(|e| StoreError::Connect(e.to_string()))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        tracing::info!(
            url = %config.store.url,
            project_id = %config.project_id,
            collection = COLLECTION,
            "store client initialized"
        );

        Ok(Self {
            conn,
            prefix: format!("{}:{}", config.project_id, COLLECTION),
        })
    }

    fn key(&self, id: Uuid) -> String {
        format!("{}:{}", self.prefix, id)
    }
}

#[async_trait::async_trait]
impl RecordStore for RedisStore {
    async fn put(&mut self, id: Uuid, record: &Record) -> StoreResult<()> {
        let key = self.key(id);
        let payload = serde_json::to_string(record).map_err(|e| StoreError::Write {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        self.conn
            .set::<_, _, ()>(&key, payload)
            .await
            .map_err(|e| StoreError::Write {
                key: key.clone(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn get(&mut self, id: Uuid) -> StoreResult<Record> {
        let key = self.key(id);
        let payload: Option<String> =
            self.conn.get(&key).await.map_err(|e| StoreError::Read {
                key: key.clone(),
                reason: e.to_string(),
            })?;
        let payload = payload.ok_or_else(|| StoreError::Missing { key: key.clone() })?;
        serde_json::from_str(&payload).map_err(|e| StoreError::Read {
            key,
            reason: e.to_string(),
        })
    }
}
