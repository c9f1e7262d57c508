//! # Commitment Derivation
//!
//! A hiding commitment to the vote bit: without the 32-byte salt the digest
//! reveals nothing, and revealing the salt later opens it. The salt is
//! generated fresh per submission and never transmitted.

use shared_crypto::{sha256_many, Digest};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Domain separation tag for commitment digests.
pub const DOMAIN_COMMITMENT: &str = "MORA_COMMITMENT_V1";

/// The two-choice answer: A is ordinal position 0, B is position 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerBit {
    /// First answer (bit 0).
    A,
    /// Second answer (bit 1).
    B,
}

impl AnswerBit {
    /// The wire/store representation.
    pub fn as_u8(self) -> u8 {
        match self {
            AnswerBit::A => 0,
            AnswerBit::B => 1,
        }
    }

    /// Parse from the wire/store representation.
    pub fn from_u8(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(AnswerBit::A),
            1 => Some(AnswerBit::B),
            _ => None,
        }
    }
}

/// The commitment's opening key: 32 fresh random bytes per submission,
/// retained client-side only. Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CommitmentSalt([u8; 32]);

impl CommitmentSalt {
    /// Generate a fresh salt.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }

    /// Raw salt bytes, for encrypted client-side retention when a later
    /// reveal is desired.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// `SHA-256(DOMAIN_COMMITMENT ‖ bit ‖ salt)`.
pub fn derive_commitment(answer_bit: AnswerBit, salt: &CommitmentSalt) -> Digest {
    sha256_many(&[
        DOMAIN_COMMITMENT.as_bytes(),
        &[answer_bit.as_u8()],
        salt.as_bytes(),
    ])
}
