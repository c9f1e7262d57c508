//! Error types for the aggregation subsystem.

use shared_types::StoreError;
use thiserror::Error;

/// Aggregation run errors.
#[derive(Debug, Error)]
pub enum AggregationError {
    /// No commitments exist for the requested epoch.
    #[error("No commitments found for epoch {epoch_id}")]
    NoCommitments {
        /// The empty epoch.
        epoch_id: String,
    },

    /// Store failure; propagated immediately, never retried here.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Result type for aggregation operations.
pub type AggregationResult<T> = Result<T, AggregationError>;

/// Commitment insertion errors (submission path).
#[derive(Debug, Error)]
pub enum CommitmentError {
    /// The nullifier was seen before: this identity already voted on this
    /// question in this epoch. Final; never retried.
    #[error("Already submitted for this question and epoch")]
    DuplicateNullifier,

    /// The referenced question does not exist.
    #[error("Unknown question: {question_id}")]
    UnknownQuestion {
        /// The missing question id.
        question_id: u32,
    },

    /// Store failure.
    #[error(transparent)]
    Storage(#[from] StoreError),
}
