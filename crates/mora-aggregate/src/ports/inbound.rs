//! Driving Ports (API - Inbound)

use crate::error::AggregationResult;
use async_trait::async_trait;
use shared_types::{AggregateRecord, CommitmentRecord, EpochId};

/// Primary Aggregation API.
///
/// `aggregate` is the one-shot operator action; the read methods back the
/// manage and past-results surfaces.
#[async_trait]
pub trait AggregationApi: Send + Sync {
    /// Tally every commitment for `epoch_id`, insert the aggregate, and
    /// finalize the epoch's question. Fails with `NoCommitments` on an empty
    /// epoch. Not idempotent: one run per epoch.
    async fn aggregate(&self, epoch_id: &EpochId) -> AggregationResult<AggregateRecord>;

    /// All finalized aggregates, newest first.
    async fn past_results(&self) -> AggregationResult<Vec<AggregateRecord>>;

    /// Read-only listing of an epoch's commitments (operator inspection).
    async fn commitments_for_epoch(
        &self,
        epoch_id: &EpochId,
    ) -> AggregationResult<Vec<CommitmentRecord>>;
}
