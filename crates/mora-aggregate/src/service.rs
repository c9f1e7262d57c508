//! Aggregation Service - Core business logic

use crate::error::{AggregationError, AggregationResult};
use crate::ports::inbound::AggregationApi;
use crate::ports::outbound::{AggregateStore, CommitmentStore, EpochCloser};
use async_trait::async_trait;
use chrono::Utc;
use shared_types::{AggregateRecord, CommitmentRecord, EpochId};
use std::sync::Arc;
use tracing::info;

/// Aggregation Service.
///
/// Stateless over its three ports; every run reads the epoch's commitments
/// fresh and writes exactly one aggregate.
pub struct AggregationService<C, A, E>
where
    C: CommitmentStore,
    A: AggregateStore,
    E: EpochCloser,
{
    commitments: Arc<C>,
    aggregates: Arc<A>,
    closer: Arc<E>,
}

impl<C, A, E> AggregationService<C, A, E>
where
    C: CommitmentStore,
    A: AggregateStore,
    E: EpochCloser,
{
    /// Create a new aggregation service.
    pub fn new(commitments: Arc<C>, aggregates: Arc<A>, closer: Arc<E>) -> Self {
        Self {
            commitments,
            aggregates,
            closer,
        }
    }
}

/// Tally an epoch's commitments. Bits outside {0, 1} cannot occur — the
/// gateway validates before insert — but the fold ignores them rather than
/// panic.
fn tally(commitments: &[CommitmentRecord]) -> (u64, u64) {
    let mut count_a = 0u64;
    let mut count_b = 0u64;
    for commitment in commitments {
        match commitment.plaintext_answer_bit {
            0 => count_a += 1,
            1 => count_b += 1,
            _ => {}
        }
    }
    (count_a, count_b)
}

#[async_trait]
impl<C, A, E> AggregationApi for AggregationService<C, A, E>
where
    C: CommitmentStore,
    A: AggregateStore,
    E: EpochCloser,
{
    async fn aggregate(&self, epoch_id: &EpochId) -> AggregationResult<AggregateRecord> {
        let commitments = self.commitments.list_for_epoch(epoch_id).await?;
        if commitments.is_empty() {
            return Err(AggregationError::NoCommitments {
                epoch_id: epoch_id.to_string(),
            });
        }

        let (count_a, count_b) = tally(&commitments);
        let total_responses = count_a + count_b;
        // Ties resolve to answer A.
        let winning_answer = u8::from(count_b > count_a);

        let record = AggregateRecord {
            question_id: commitments[0].question_id,
            epoch_id: epoch_id.clone(),
            total_responses,
            count_a,
            count_b,
            winning_answer,
            aggregation_digest: format!("{epoch_id}_{total_responses}_{winning_answer}"),
            finalized_at: Utc::now(),
        };

        self.aggregates.insert(record.clone()).await?;
        let finalized = self.closer.close_epoch(epoch_id).await?;

        info!(
            epoch = %epoch_id,
            total = total_responses,
            count_a,
            count_b,
            winning_answer,
            questions_finalized = finalized,
            "[aggregate] epoch aggregated"
        );
        Ok(record)
    }

    async fn past_results(&self) -> AggregationResult<Vec<AggregateRecord>> {
        Ok(self.aggregates.list_all().await?)
    }

    async fn commitments_for_epoch(
        &self,
        epoch_id: &EpochId,
    ) -> AggregationResult<Vec<CommitmentRecord>> {
        Ok(self.commitments.list_for_epoch(epoch_id).await?)
    }
}
