//! # mora-identity
//!
//! Identity commitment engine: the hashes that let a client prove "one vote
//! per identity per question per epoch" while keeping both the identity and
//! the vote opaque to the server until aggregation.
//!
//! ## Protocol
//!
//! | Digest | Formula | Reveals |
//! |--------|---------|---------|
//! | identity secret | `HKDF(vmk, MORA_USER_SECRET_V1, nullifier-root)` | nothing server-side |
//! | nullifier | `SHA-256(MORA_NULLIFIER_V1 ‖ secret ‖ be32(qid) ‖ epoch)` | duplicate votes only |
//! | commitment | `SHA-256(MORA_COMMITMENT_V1 ‖ bit ‖ salt)` | nothing without the salt |
//!
//! The two domain tags keep the hash families from colliding or being
//! reinterpreted across protocol versions; bumping to `_V2` tags leaves old
//! rows verifiable forever.
//!
//! Every function here is pure over already-validated inputs: the submission
//! flow confirms a resident VMK and a resolved active question before calling
//! in, so this crate has no failure modes of its own. Derivations are
//! independent per submission and safe to run in parallel.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commitment;
pub mod nullifier;
pub mod secret;
pub mod submission;

pub use commitment::{derive_commitment, AnswerBit, CommitmentSalt, DOMAIN_COMMITMENT};
pub use nullifier::{derive_nullifier, DOMAIN_NULLIFIER};
pub use secret::{derive_identity_secret, IdentitySecret};
pub use submission::{build_submission, SubmissionParts};
