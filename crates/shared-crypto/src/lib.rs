//! # Shared Crypto - Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `symmetric` | AES-256-GCM | Key wrapping, item encryption |
//! | `hashing` | SHA-256 | Nullifiers, commitments |
//! | `kdf` | PBKDF2-HMAC-SHA256, HKDF-SHA256 | Password and PRF key derivation |
//!
//! ## Security Properties
//!
//! - **AES-256-GCM**: Authenticated encryption; a fresh random 96-bit nonce
//!   per operation, never reused for the same key.
//! - **PBKDF2 @ 600k iterations**: Slow, salted stretching for the password
//!   KEK to resist offline brute force.
//! - **HKDF-SHA256**: Fast, labeled derivation for device-bound PRF output
//!   and the per-vault identity secret.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod kdf;
pub mod symmetric;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{sha256, sha256_many, Digest};
pub use kdf::{derive_password_kek, hkdf_sha256, PBKDF2_ITERATIONS};
pub use symmetric::{decrypt, encrypt, Nonce, SecretKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
