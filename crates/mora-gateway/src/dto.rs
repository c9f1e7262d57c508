//! Response shapes for the HTTP surface.

use mora_pool::ActiveQuestion;
use serde::Serialize;
use shared_types::{Answer, CommitmentId, Question};

/// Answer as served to clients.
#[derive(Debug, Serialize)]
pub struct AnswerDto {
    /// Answer row id; ordinal position is the answer bit.
    pub id: u32,
    /// Answer text.
    pub text: String,
}

/// The active (or sample) question as served to clients.
#[derive(Debug, Serialize)]
pub struct ActiveQuestionResponse {
    /// Question row id.
    pub id: u32,
    /// Optional display title.
    pub title: Option<String>,
    /// Optional image reference.
    pub image: Option<String>,
    /// The dilemma text.
    pub text: String,
    /// Lifecycle status as stored.
    pub status: String,
    /// Epoch this question is live for, if promoted.
    pub epoch_id: Option<String>,
    /// Start of the live hour (RFC 3339).
    pub opens_at: Option<String>,
    /// End of the live hour (RFC 3339).
    pub closes_at: Option<String>,
    /// Answers in ordinal (bit) order.
    pub answers: Vec<AnswerDto>,
}

impl From<ActiveQuestion> for ActiveQuestionResponse {
    fn from(resolved: ActiveQuestion) -> Self {
        let ActiveQuestion { question, answers } = resolved;
        let Question {
            id,
            title,
            image,
            text,
            status,
            epoch_id,
            opens_at,
            closes_at,
            ..
        } = question;

        Self {
            id,
            title,
            image,
            text,
            status: status.to_string(),
            epoch_id: epoch_id.map(|e| e.to_string()),
            opens_at: opens_at.map(|t| t.to_rfc3339()),
            closes_at: closes_at.map(|t| t.to_rfc3339()),
            answers: answers
                .into_iter()
                .map(|Answer { id, text, .. }| AnswerDto { id, text })
                .collect(),
        }
    }
}

/// `201 Created` body for a stored commitment.
#[derive(Debug, Serialize)]
pub struct SubmitCommitmentResponse {
    /// Commitment row id.
    pub id: CommitmentId,
    /// Insertion timestamp (RFC 3339).
    pub submitted_at: String,
}

/// Body for a completed aggregation run.
#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    /// Always true on success.
    pub success: bool,
}
