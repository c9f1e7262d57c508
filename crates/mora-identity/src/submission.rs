//! # Submission Assembly
//!
//! Builds the network payload for one vote. The nullifier and commitment are
//! hex-rendered for the store; the salt stays with the caller and must never
//! reach the server.

use crate::commitment::{derive_commitment, AnswerBit, CommitmentSalt};
use crate::nullifier::derive_nullifier;
use crate::secret::IdentitySecret;
use shared_types::{EpochId, NewCommitment, QuestionId};

/// The assembled payload plus the client-retained opening salt.
pub struct SubmissionParts {
    /// Wire payload for `POST /api/game/commitments`.
    pub payload: NewCommitment,
    /// Opening salt. Discard after use, or persist encrypted under the VMK
    /// if a later reveal is desired. Never transmitted.
    pub salt: CommitmentSalt,
}

/// Assemble a submission for an already-resolved active question.
///
/// The caller has confirmed a resident VMK and derived `secret` from it; the
/// transitional `plaintext_answer_bit` rides along until a hiding aggregator
/// replaces it.
pub fn build_submission(
    secret: &IdentitySecret,
    question_id: QuestionId,
    epoch_id: &EpochId,
    answer_bit: AnswerBit,
    encrypted_answer: String,
) -> SubmissionParts {
    let nullifier = derive_nullifier(secret, question_id, epoch_id);
    let salt = CommitmentSalt::generate();
    let commitment = derive_commitment(answer_bit, &salt);

    SubmissionParts {
        payload: NewCommitment {
            question_id,
            epoch_id: epoch_id.clone(),
            nullifier: hex::encode(nullifier),
            commitment: hex::encode(commitment),
            encrypted_answer,
            plaintext_answer_bit: answer_bit.as_u8(),
        },
        salt,
    }
}
