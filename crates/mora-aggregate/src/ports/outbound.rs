//! Driven Ports (SPI - Outbound Dependencies)

use crate::error::CommitmentError;
use async_trait::async_trait;
use shared_types::{AggregateRecord, CommitmentRecord, EpochId, NewCommitment, StoreError};

/// Store interface for `response_commitments`.
///
/// Uniqueness is enforced on `nullifier` alone: the digest already binds
/// question, epoch, and identity, so a wider key would only mask derivation
/// bugs.
#[async_trait]
pub trait CommitmentStore: Send + Sync {
    /// Insert a commitment row. Fails with `DuplicateNullifier` when the
    /// nullifier was seen before.
    async fn insert(&self, new: NewCommitment) -> Result<CommitmentRecord, CommitmentError>;

    /// Every commitment bound to `epoch_id`.
    async fn list_for_epoch(&self, epoch_id: &EpochId) -> Result<Vec<CommitmentRecord>, StoreError>;
}

/// Store interface for `question_aggregates`. Rows are write-once.
#[async_trait]
pub trait AggregateStore: Send + Sync {
    /// Insert the aggregate for an epoch. A same-epoch re-insert is a store
    /// error (the aggregate is immutable and created exactly once).
    async fn insert(&self, record: AggregateRecord) -> Result<(), StoreError>;

    /// All aggregates, newest `finalized_at` first.
    async fn list_all(&self) -> Result<Vec<AggregateRecord>, StoreError>;
}

/// Question-pool hook invoked after a successful aggregation run.
#[async_trait]
pub trait EpochCloser: Send + Sync {
    /// Finalize every question bound to `epoch_id`; returns rows changed.
    async fn close_epoch(&self, epoch_id: &EpochId) -> Result<u64, StoreError>;
}
