//! Driven Ports (SPI - Outbound Dependencies)
//!
//! The relational store behind the pool, reduced to the queries and
//! conditional writes the state machine needs. Adapters decide how each call
//! maps onto their backend; the contract below is what the service relies on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{Answer, EpochId, NewQuestion, Question, QuestionId, StoreError};

/// Store interface for `questions_repo` and `question_answers`.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Count ACTIVE questions system-wide.
    async fn count_active(&self) -> Result<u64, StoreError>;

    /// ACTIVE questions bound to `epoch_id`, capped at `limit` rows
    /// (the resolution path fetches at most 2 to detect duplicates).
    async fn active_in_epoch(
        &self,
        epoch_id: &EpochId,
        limit: usize,
    ) -> Result<Vec<Question>, StoreError>;

    /// The most recently created UPCOMING question, if any.
    async fn latest_upcoming(&self) -> Result<Option<Question>, StoreError>;

    /// A uniformly random FINALIZED question, if any (recycling source).
    async fn random_finalized(&self) -> Result<Option<Question>, StoreError>;

    /// Insert a new UPCOMING question with its answers in ordinal order.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError>;

    /// Atomically promote `question_id` for `epoch_id`: succeeds only while
    /// the question is still UPCOMING and no ACTIVE row holds that epoch.
    /// On success the row becomes ACTIVE with the given bounds,
    /// `last_promoted_at = promoted_at`, and an incremented `times_asked`;
    /// returns the updated row. Returns `None` if the compare-and-set lost.
    async fn promote_if_vacant(
        &self,
        question_id: QuestionId,
        epoch_id: &EpochId,
        opens_at: DateTime<Utc>,
        closes_at: DateTime<Utc>,
        promoted_at: DateTime<Utc>,
    ) -> Result<Option<Question>, StoreError>;

    /// Demote ACTIVE questions whose epoch differs from `current_epoch` to
    /// AGGREGATING. Returns the number of rows demoted.
    async fn demote_stale_active(&self, current_epoch: &EpochId) -> Result<u64, StoreError>;

    /// Answers for a question, ordered by insertion (`id`).
    async fn answers_for(&self, question_id: QuestionId) -> Result<Vec<Answer>, StoreError>;

    /// The question with the latest `closes_at` among those that have been
    /// live (ACTIVE, AGGREGATING, or FINALIZED), for the preview path.
    async fn latest_closed(&self) -> Result<Option<Question>, StoreError>;

    /// Set every question bound to `epoch_id` to FINALIZED. Re-finalizing is
    /// a no-op. Returns the number of rows that changed.
    async fn finalize_epoch(&self, epoch_id: &EpochId) -> Result<u64, StoreError>;
}
