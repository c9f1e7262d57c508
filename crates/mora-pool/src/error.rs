//! Error types for the question pool subsystem.

use shared_types::StoreError;
use thiserror::Error;

/// Question pool errors.
#[derive(Debug, Error)]
pub enum PoolError {
    /// More than two ACTIVE questions exist system-wide. Invariant breach;
    /// requires manual operator reset, never auto-healed.
    #[error("Corrupted state: {active_count} ACTIVE questions system-wide (max 2)")]
    CorruptedState {
        /// Observed ACTIVE row count.
        active_count: u64,
    },

    /// More than one ACTIVE question shares one epoch. Invariant breach;
    /// requires manual operator reset, never auto-healed.
    #[error("Corrupted state: multiple ACTIVE questions share epoch {epoch_id}")]
    DuplicateEpoch {
        /// The contested epoch.
        epoch_id: String,
    },

    /// No UPCOMING question and no FINALIZED source to recycle from.
    #[error("Question pool exhausted: nothing to promote and nothing to recycle")]
    PoolExhausted,

    /// Rejected question payload (operator seeding path).
    #[error("Invalid question: {reason}")]
    InvalidQuestion {
        /// What the payload is missing.
        reason: String,
    },

    /// Store failure; propagated immediately, never retried here.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;
