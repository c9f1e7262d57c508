//! # Nullifier Derivation
//!
//! One-way, deterministic duplicate detection. The same identity voting on
//! the same (question, epoch) reproduces the identical digest — the store's
//! uniqueness constraint then rejects the repeat — while neither the identity
//! secret nor the vote can be recovered from it.

use crate::secret::IdentitySecret;
use shared_crypto::{sha256_many, Digest};
use shared_types::{EpochId, QuestionId};

/// Domain separation tag for nullifier digests.
pub const DOMAIN_NULLIFIER: &str = "MORA_NULLIFIER_V1";

/// `SHA-256(DOMAIN_NULLIFIER ‖ secret ‖ be32(question_id) ‖ utf8(epoch_id))`.
///
/// Independent of the answer chosen: one submission per identity per question
/// per epoch, whatever the vote.
pub fn derive_nullifier(
    secret: &IdentitySecret,
    question_id: QuestionId,
    epoch_id: &EpochId,
) -> Digest {
    sha256_many(&[
        DOMAIN_NULLIFIER.as_bytes(),
        secret.as_bytes(),
        &question_id.to_be_bytes(),
        epoch_id.as_str().as_bytes(),
    ])
}
