//! Driving Ports (API - Inbound)

use crate::domain::ActiveQuestion;
use crate::error::PoolResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{EpochId, NewQuestion, Question};

/// Primary Question Pool API.
///
/// This is the driving port for the pool subsystem: the gateway resolves the
/// live question through it, and the aggregation engine closes epochs through
/// it.
#[async_trait]
pub trait PoolApi: Send + Sync {
    /// Resolve the live question for the epoch containing `now`, promoting
    /// (and if necessary recycling) from the pool.
    ///
    /// Fails with `CorruptedState`/`DuplicateEpoch` on invariant breaches
    /// (without mutating) and `PoolExhausted` when there is nothing left to
    /// promote or recycle.
    ///
    /// Callers must pass one `now` snapshot per logical operation; taking a
    /// second snapshot risks straddling an hour boundary.
    async fn resolve_active_question(&self, now: DateTime<Utc>) -> PoolResult<ActiveQuestion>;

    /// The most recently closed question, for anonymous preview. Read-only:
    /// never promotes, demotes, or recycles. `None` if the pool has never
    /// had a live question.
    async fn sample_question(&self) -> PoolResult<Option<ActiveQuestion>>;

    /// Finalize every question bound to `epoch_id`. Invoked by the
    /// aggregation engine after a successful run; idempotent by construction.
    /// Returns the number of rows that changed status.
    async fn close_epoch(&self, epoch_id: &EpochId) -> PoolResult<u64>;

    /// Seed a new UPCOMING question (operator path). Rejects payloads with
    /// fewer than two answers or an empty body.
    async fn add_question(&self, new: NewQuestion) -> PoolResult<Question>;
}
