//! Epoch-closer adapter over the question pool's inbound API.

use crate::ports::outbound::EpochCloser;
use async_trait::async_trait;
use mora_pool::PoolApi;
use shared_types::{EpochId, StoreError};
use std::sync::Arc;

/// Bridges `EpochCloser` onto the pool subsystem.
pub struct PoolEpochCloser {
    pool: Arc<dyn PoolApi>,
}

impl PoolEpochCloser {
    /// Wrap a pool API handle.
    pub fn new(pool: Arc<dyn PoolApi>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EpochCloser for PoolEpochCloser {
    async fn close_epoch(&self, epoch_id: &EpochId) -> Result<u64, StoreError> {
        self.pool
            .close_epoch(epoch_id)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}
