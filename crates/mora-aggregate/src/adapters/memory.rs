//! In-memory commitment and aggregate stores.
//!
//! The commitment store keeps a nullifier index beside the rows; membership
//! there IS the uniqueness constraint. The aggregate store is write-once per
//! epoch.

use crate::error::CommitmentError;
use crate::ports::outbound::{AggregateStore, CommitmentStore};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use shared_types::{
    AggregateRecord, CommitmentId, CommitmentRecord, EpochId, NewCommitment, StoreError,
};
use std::collections::HashSet;

#[derive(Default)]
struct CommitmentsInner {
    rows: Vec<CommitmentRecord>,
    nullifiers: HashSet<String>,
    next_id: CommitmentId,
}

/// In-memory adapter for `response_commitments`.
#[derive(Default)]
pub struct InMemoryCommitmentStore {
    inner: RwLock<CommitmentsInner>,
}

impl InMemoryCommitmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rows across all epochs (diagnostics).
    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.inner.read().rows.is_empty()
    }
}

#[async_trait]
impl CommitmentStore for InMemoryCommitmentStore {
    async fn insert(&self, new: NewCommitment) -> Result<CommitmentRecord, CommitmentError> {
        let mut inner = self.inner.write();

        if inner.nullifiers.contains(&new.nullifier) {
            return Err(CommitmentError::DuplicateNullifier);
        }

        inner.next_id += 1;
        let record = CommitmentRecord {
            id: inner.next_id,
            question_id: new.question_id,
            epoch_id: new.epoch_id,
            nullifier: new.nullifier.clone(),
            commitment: new.commitment,
            encrypted_answer: new.encrypted_answer,
            plaintext_answer_bit: new.plaintext_answer_bit,
            submitted_at: Utc::now(),
        };
        inner.nullifiers.insert(new.nullifier);
        inner.rows.push(record.clone());
        Ok(record)
    }

    async fn list_for_epoch(&self, epoch_id: &EpochId) -> Result<Vec<CommitmentRecord>, StoreError> {
        Ok(self
            .inner
            .read()
            .rows
            .iter()
            .filter(|c| &c.epoch_id == epoch_id)
            .cloned()
            .collect())
    }
}

/// In-memory adapter for `question_aggregates`.
#[derive(Default)]
pub struct InMemoryAggregateStore {
    rows: RwLock<Vec<AggregateRecord>>,
}

impl InMemoryAggregateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AggregateStore for InMemoryAggregateStore {
    async fn insert(&self, record: AggregateRecord) -> Result<(), StoreError> {
        let mut rows = self.rows.write();
        if rows.iter().any(|r| r.epoch_id == record.epoch_id) {
            return Err(StoreError::Backend(format!(
                "aggregate already exists for epoch {}",
                record.epoch_id
            )));
        }
        rows.push(record);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<AggregateRecord>, StoreError> {
        let mut rows = self.rows.read().clone();
        rows.sort_by(|a, b| b.finalized_at.cmp(&a.finalized_at));
        Ok(rows)
    }
}
