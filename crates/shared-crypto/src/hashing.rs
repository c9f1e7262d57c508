//! # SHA-256 Hashing
//!
//! One-shot and multi-input digests. The commitment scheme concatenates
//! domain tags, secrets, and identifiers; `sha256_many` hashes the parts in
//! order without building an intermediate buffer.

use sha2::{Digest as _, Sha256};

/// SHA-256 hash output (256-bit).
pub type Digest = [u8; 32];

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash multiple inputs as one concatenated message.
pub fn sha256_many(inputs: &[&[u8]]) -> Digest {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}
