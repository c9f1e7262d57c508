//! Typed payload validation.
//!
//! One validator per payload, shared by every entry point: each produces a
//! typed domain value or a `ValidationError` naming the offending field.
//! Handlers never see raw JSON.

use serde::Deserialize;
use shared_types::{EpochId, NewCommitment, NewQuestion, QuestionId};
use thiserror::Error;

/// A rejected field and why.
#[derive(Debug, Error)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    /// The offending field.
    pub field: &'static str,
    /// What was wrong with it.
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Hex digest length for SHA-256 (64 nibbles).
const DIGEST_HEX_LEN: usize = 64;

/// `HHDDMMYY`.
const EPOCH_ID_LEN: usize = 8;

fn validate_epoch_id(raw: &str, field: &'static str) -> Result<EpochId, ValidationError> {
    let raw = raw.trim();
    if raw.len() != EPOCH_ID_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            format!("expected {EPOCH_ID_LEN} digits"),
        ));
    }
    Ok(EpochId::new(raw))
}

fn validate_digest_hex(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    if raw.len() != DIGEST_HEX_LEN || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ValidationError::new(
            field,
            format!("expected {DIGEST_HEX_LEN} hex characters"),
        ));
    }
    Ok(raw.to_ascii_lowercase())
}

/// `POST /api/game/commitments` body.
#[derive(Debug, Deserialize)]
pub struct SubmitCommitmentRequest {
    /// Question voted on.
    pub question_id: QuestionId,
    /// Epoch voted in (`HHDDMMYY`).
    pub epoch_id: String,
    /// Nullifier digest, hex.
    pub nullifier: String,
    /// Commitment digest, hex.
    pub commitment: String,
    /// Encrypted vote ciphertext placeholder.
    pub encrypted_answer: String,
    /// Transitional cleartext vote bit.
    pub plaintext_answer_bit: u8,
}

impl SubmitCommitmentRequest {
    /// Validate into an insertable commitment.
    pub fn validate(self) -> Result<NewCommitment, ValidationError> {
        if self.question_id == 0 {
            return Err(ValidationError::new("question_id", "must be positive"));
        }
        let epoch_id = validate_epoch_id(&self.epoch_id, "epoch_id")?;
        let nullifier = validate_digest_hex(&self.nullifier, "nullifier")?;
        let commitment = validate_digest_hex(&self.commitment, "commitment")?;
        if self.encrypted_answer.is_empty() {
            return Err(ValidationError::new("encrypted_answer", "must not be empty"));
        }
        if self.plaintext_answer_bit > 1 {
            return Err(ValidationError::new("plaintext_answer_bit", "must be 0 or 1"));
        }

        Ok(NewCommitment {
            question_id: self.question_id,
            epoch_id,
            nullifier,
            commitment,
            encrypted_answer: self.encrypted_answer,
            plaintext_answer_bit: self.plaintext_answer_bit,
        })
    }
}

/// `POST /api/game/manage/aggregate` body.
#[derive(Debug, Deserialize)]
pub struct AggregateRequest {
    /// Epoch to aggregate (`HHDDMMYY`).
    pub epoch_id: String,
}

impl AggregateRequest {
    /// Validate the epoch identifier.
    pub fn validate(self) -> Result<EpochId, ValidationError> {
        validate_epoch_id(&self.epoch_id, "epoch_id")
    }
}

/// `GET /api/game/manage/commitments` query.
#[derive(Debug, Deserialize)]
pub struct EpochQuery {
    /// Epoch to list (`HHDDMMYY`).
    pub epoch_id: String,
}

impl EpochQuery {
    /// Validate the epoch identifier.
    pub fn validate(self) -> Result<EpochId, ValidationError> {
        validate_epoch_id(&self.epoch_id, "epoch_id")
    }
}

/// `POST /api/game/manage/questions` body.
#[derive(Debug, Deserialize)]
pub struct AddQuestionRequest {
    /// Optional display title.
    pub title: Option<String>,
    /// Optional image reference.
    pub image: Option<String>,
    /// The dilemma text.
    pub text: String,
    /// Answer texts in ordinal order.
    pub answers: Vec<String>,
}

impl AddQuestionRequest {
    /// Validate into an insertable question.
    pub fn validate(self) -> Result<NewQuestion, ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::new("text", "must not be empty"));
        }
        if self.answers.len() < 2 {
            return Err(ValidationError::new("answers", "at least 2 required"));
        }
        if self.answers.iter().any(|a| a.trim().is_empty()) {
            return Err(ValidationError::new("answers", "must not contain empty entries"));
        }

        Ok(NewQuestion {
            title: self.title,
            image: self.image,
            text: self.text,
            answers: self.answers,
        })
    }
}
