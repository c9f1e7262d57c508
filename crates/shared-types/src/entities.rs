//! # Domain Entities
//!
//! Store-facing rows and derived values shared by the pool, aggregation, and
//! gateway subsystems.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a question row.
pub type QuestionId = u32;

/// Identifier for an answer row.
pub type AnswerId = u32;

/// Identifier for a commitment row.
pub type CommitmentId = u64;

/// One UTC-hour poll round, encoded as fixed-width `HHDDMMYY`.
///
/// `HH` is the game hour slot (1..=24), not the raw UTC hour. The encoding is
/// NOT lexicographically sortable and wraps at year boundaries: treat it as an
/// opaque grouping key only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochId(String);

impl EpochId {
    /// Wrap an already-formatted epoch identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as stored (`HHDDMMYY`).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpochId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Question lifecycle status.
///
/// State progression: Upcoming → Active → Aggregating → Finalized.
/// Finalized is terminal except as a read-only source for recycling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionStatus {
    /// In the pool, waiting to be promoted for some epoch.
    #[default]
    Upcoming,
    /// The live question for its `epoch_id`.
    Active,
    /// Epoch over, awaiting the operator aggregation run.
    Aggregating,
    /// Aggregated; eligible as a recycling source.
    Finalized,
}

impl QuestionStatus {
    /// Whether the lifecycle permits moving from `self` to `next`.
    ///
    /// No skips, no reverse transitions. Finalized → Finalized is allowed so
    /// that closing an epoch twice is a no-op.
    pub fn can_transition_to(self, next: QuestionStatus) -> bool {
        use QuestionStatus::*;
        matches!(
            (self, next),
            (Upcoming, Active) | (Active, Aggregating) | (Aggregating, Finalized) | (Finalized, Finalized)
        )
    }

    /// The store representation (`UPCOMING`, `ACTIVE`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionStatus::Upcoming => "UPCOMING",
            QuestionStatus::Active => "ACTIVE",
            QuestionStatus::Aggregating => "AGGREGATING",
            QuestionStatus::Finalized => "FINALIZED",
        }
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question row (`questions_repo`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Row identifier.
    pub id: QuestionId,
    /// Optional display title.
    pub title: Option<String>,
    /// Optional image reference.
    pub image: Option<String>,
    /// The dilemma text.
    pub text: String,
    /// Lifecycle status.
    pub status: QuestionStatus,
    /// Epoch this question is (or was last) live for. None while Upcoming.
    pub epoch_id: Option<EpochId>,
    /// Start of the live hour. Set only once Active.
    pub opens_at: Option<DateTime<Utc>>,
    /// End of the live hour. Set only once Active.
    pub closes_at: Option<DateTime<Utc>>,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
    /// Last promotion timestamp.
    pub last_promoted_at: Option<DateTime<Utc>>,
    /// How many epochs this row has been live for.
    pub times_asked: u32,
}

/// An answer row (`question_answers`). Ordinal position within its question
/// (by `id`) is the 0/1 answer bit used by the commitment scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Row identifier; insertion order defines the answer bit.
    pub id: AnswerId,
    /// Parent question.
    pub question_id: QuestionId,
    /// Answer text.
    pub text: String,
}

/// Insert payload for a new question and its answers.
///
/// Used by operator seeding and by pool recycling (which clones text only,
/// dropping all identifiers, timestamps, and status from the source row).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewQuestion {
    /// Optional display title.
    pub title: Option<String>,
    /// Optional image reference.
    pub image: Option<String>,
    /// The dilemma text.
    pub text: String,
    /// Answer texts in ordinal order. At least 2 required before promotion.
    pub answers: Vec<String>,
}

/// A commitment row (`response_commitments`). Immutable once inserted;
/// uniqueness is enforced by the store on `nullifier` alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommitmentRecord {
    /// Row identifier.
    pub id: CommitmentId,
    /// Question voted on.
    pub question_id: QuestionId,
    /// Epoch voted in.
    pub epoch_id: EpochId,
    /// One-way duplicate-detection digest (64 hex chars).
    pub nullifier: String,
    /// Hiding vote digest (64 hex chars), openable only with the client salt.
    pub commitment: String,
    /// Ciphertext placeholder for the encrypted vote.
    pub encrypted_answer: String,
    /// Transitional cleartext vote bit used by aggregation. Known privacy
    /// leak, kept until a hiding aggregator replaces it.
    pub plaintext_answer_bit: u8,
    /// Insertion timestamp.
    pub submitted_at: DateTime<Utc>,
}

/// Insert payload for a commitment row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCommitment {
    /// Question voted on.
    pub question_id: QuestionId,
    /// Epoch voted in.
    pub epoch_id: EpochId,
    /// One-way duplicate-detection digest (64 hex chars).
    pub nullifier: String,
    /// Hiding vote digest (64 hex chars).
    pub commitment: String,
    /// Ciphertext placeholder for the encrypted vote.
    pub encrypted_answer: String,
    /// Transitional cleartext vote bit.
    pub plaintext_answer_bit: u8,
}

/// An aggregate row (`question_aggregates`). Created exactly once per epoch;
/// immutable thereafter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    /// Question the epoch belonged to.
    pub question_id: QuestionId,
    /// Epoch aggregated.
    pub epoch_id: EpochId,
    /// Total commitments tallied.
    pub total_responses: u64,
    /// Votes for answer A (bit 0).
    pub count_a: u64,
    /// Votes for answer B (bit 1).
    pub count_b: u64,
    /// 0 or 1; ties resolve to answer A.
    pub winning_answer: u8,
    /// Deterministic `{epoch}_{total}_{winning}` summary for external
    /// verification.
    pub aggregation_digest: String,
    /// When the aggregation run completed.
    pub finalized_at: DateTime<Utc>,
}

/// Per-user wrapped key material as the server stores it. All fields are hex;
/// the unwrapped Vault Master Key never crosses the trust boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VaultKeyMaterial {
    /// PBKDF2 salt for the password KEK.
    pub kek_salt: String,
    /// VMK ciphertext under the password KEK.
    pub wrapped_vmk: String,
    /// Nonce for `wrapped_vmk`.
    pub vmk_iv: String,
    /// VMK ciphertext under the biometric PRF KEK, once enrolled.
    pub wrapped_vmk_prf: Option<String>,
    /// Nonce for `wrapped_vmk_prf`.
    pub prf_vmk_iv: Option<String>,
}
