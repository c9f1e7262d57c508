//! # mora-vault
//!
//! Vault key hierarchy: three tiers of AES-256-GCM envelope encryption.
//!
//! ```text
//! password ──PBKDF2──→ KEK ─┐
//!                           ├──wraps──→ VMK ──wraps──→ DEK ──encrypts──→ item
//! PRF output ──HKDF──→ KEK ─┘
//! ```
//!
//! ## Overview
//!
//! - **VMK (Vault Master Key)**: fresh random 256-bit key; exists only in a
//!   session-scoped [`VaultSession`], never persisted.
//! - **Password path**: PBKDF2-HMAC-SHA256 (600k iterations, 16-byte salt)
//!   derives a KEK that wraps the VMK.
//! - **Biometric path**: the platform authenticator's PRF output is expanded
//!   through HKDF under a fixed application salt/label, producing a second,
//!   independent KEK that wraps the same VMK bytes. Enrollment may happen
//!   after vault creation (lazy commit).
//! - **Items**: each item gets a fresh DEK; the DEK ciphertext travels with
//!   the item envelope.
//!
//! The server ever sees only ciphertexts, salts, and nonces. Losing both the
//! password and every enrolled authenticator is unrecoverable: there is no
//! server-side key escrow.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod hierarchy;
pub mod item;
pub mod session;

pub use error::VaultError;
pub use hierarchy::{
    create_vault, enroll_biometric, unwrap_vault, UnlockSecret, VaultMasterKey, KEK_SALT_LEN,
    MIN_PASSWORD_LEN, VAULT_HKDF_SALT, VAULT_PRF_KEK_INFO,
};
pub use item::{unwrap_item, wrap_item, ItemEnvelope};
pub use session::VaultSession;
