//! Question Pool Service - Core business logic

use crate::domain::{recycle_clone, ActiveQuestion};
use crate::error::{PoolError, PoolResult};
use crate::ports::inbound::PoolApi;
use crate::ports::outbound::QuestionStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mora_epoch::{epoch_bounds, epoch_id};
use shared_types::{EpochId, NewQuestion, Question};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// ACTIVE rows tolerated system-wide before resolution refuses to touch the
/// pool: the current epoch's question plus one not-yet-demoted predecessor.
const MAX_ACTIVE_TOTAL: u64 = 2;

/// Promotion attempts per resolution. Each retry either follows a lost
/// compare-and-set (a peer promoted first) or a freshly recycled row.
const MAX_PROMOTE_ATTEMPTS: usize = 3;

/// Question Pool Service.
///
/// Owns the hour-epoch state machine over the question pool. All mutation
/// funnels through the store port's conditional writes; this service never
/// read-modify-writes a promotion.
pub struct PoolService<S: QuestionStore> {
    store: Arc<S>,
}

impl<S: QuestionStore> PoolService<S> {
    /// Create a new pool service over a question store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Best-effort demotion of ACTIVE questions from earlier epochs.
    /// Failures degrade to a warning; the caller's resolution proceeds.
    async fn demote_stale(&self, current_epoch: &EpochId) {
        match self.store.demote_stale_active(current_epoch).await {
            Ok(0) => {}
            Ok(demoted) => {
                debug!(demoted, epoch = %current_epoch, "[pool] demoted stale ACTIVE questions");
            }
            Err(e) => {
                warn!(error = %e, epoch = %current_epoch, "[pool] best-effort demotion failed");
            }
        }
    }

    /// Clone a uniformly random FINALIZED question back into the pool as a
    /// fresh UPCOMING row. `PoolExhausted` if no source exists.
    async fn recycle(&self) -> PoolResult<Question> {
        let source = self
            .store
            .random_finalized()
            .await?
            .ok_or(PoolError::PoolExhausted)?;
        let answers = self.store.answers_for(source.id).await?;

        // Unbiased coin: a recycled two-answer question must not inherit the
        // source row's A/B positions.
        let swap = rand::random::<bool>();
        let recycled = self
            .store
            .insert_question(recycle_clone(&source, &answers, swap))
            .await?;

        info!(
            source_id = source.id,
            recycled_id = recycled.id,
            swapped = swap,
            "[pool] ♻️ recycled FINALIZED question into the pool"
        );
        Ok(recycled)
    }

    async fn with_answers(&self, question: Question) -> PoolResult<ActiveQuestion> {
        let answers = self.store.answers_for(question.id).await?;
        Ok(ActiveQuestion { question, answers })
    }
}

#[async_trait]
impl<S: QuestionStore> PoolApi for PoolService<S> {
    async fn resolve_active_question(&self, now: DateTime<Utc>) -> PoolResult<ActiveQuestion> {
        let epoch = epoch_id(now);

        // Invariant checks first; a breach fails the call before any write.
        let active_count = self.store.count_active().await?;
        if active_count > MAX_ACTIVE_TOTAL {
            return Err(PoolError::CorruptedState { active_count });
        }

        let mut in_epoch = self.store.active_in_epoch(&epoch, 2).await?;
        if in_epoch.len() > 1 {
            return Err(PoolError::DuplicateEpoch {
                epoch_id: epoch.to_string(),
            });
        }
        if let Some(question) = in_epoch.pop() {
            self.demote_stale(&epoch).await;
            return self.with_answers(question).await;
        }

        // No live question for this epoch yet: promote the latest UPCOMING
        // row, recycling one when the pool is empty. Bounded retry; each
        // round re-reads because a concurrent resolution may win the race.
        let (opens_at, closes_at) = epoch_bounds(now);
        for _ in 0..MAX_PROMOTE_ATTEMPTS {
            let candidate = match self.store.latest_upcoming().await? {
                Some(question) => question,
                None => self.recycle().await?,
            };

            match self
                .store
                .promote_if_vacant(candidate.id, &epoch, opens_at, closes_at, now)
                .await?
            {
                Some(promoted) => {
                    info!(
                        question_id = promoted.id,
                        epoch = %epoch,
                        times_asked = promoted.times_asked,
                        "[pool] promoted question for epoch"
                    );
                    self.demote_stale(&epoch).await;
                    return self.with_answers(promoted).await;
                }
                None => {
                    // Lost the compare-and-set. If a peer claimed the epoch,
                    // serve its row; otherwise the candidate itself raced
                    // away and the next round picks a new one.
                    if let Some(question) =
                        self.store.active_in_epoch(&epoch, 2).await?.into_iter().next()
                    {
                        self.demote_stale(&epoch).await;
                        return self.with_answers(question).await;
                    }
                }
            }
        }

        Err(PoolError::PoolExhausted)
    }

    async fn sample_question(&self) -> PoolResult<Option<ActiveQuestion>> {
        match self.store.latest_closed().await? {
            Some(question) => Ok(Some(self.with_answers(question).await?)),
            None => Ok(None),
        }
    }

    async fn close_epoch(&self, epoch_id: &EpochId) -> PoolResult<u64> {
        let finalized = self.store.finalize_epoch(epoch_id).await?;
        info!(epoch = %epoch_id, finalized, "[pool] closed epoch");
        Ok(finalized)
    }

    async fn add_question(&self, new: NewQuestion) -> PoolResult<Question> {
        if new.text.trim().is_empty() {
            return Err(PoolError::InvalidQuestion {
                reason: "question text must not be empty".into(),
            });
        }
        if new.answers.len() < 2 {
            return Err(PoolError::InvalidQuestion {
                reason: "a question needs at least 2 answers".into(),
            });
        }
        Ok(self.store.insert_question(new).await?)
    }
}
