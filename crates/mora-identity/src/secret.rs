//! # Identity Secret
//!
//! A stable per-vault voting identity, derived — never stored. The same VMK
//! always reproduces the same secret, so the server needs no state to
//! "remember" a voter across sessions, and without the VMK the secret is
//! unreachable.

use mora_vault::VaultMasterKey;
use shared_crypto::hkdf_sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// HKDF salt binding the identity secret to this protocol version.
pub(crate) const IDENTITY_HKDF_SALT: &[u8] = b"MORA_USER_SECRET_V1";

/// HKDF info label for the identity secret's purpose.
pub(crate) const IDENTITY_HKDF_INFO: &[u8] = b"nullifier-root";

/// The per-vault identity secret (256-bit). Zeroized on drop; retained
/// client-side only for the duration of a submission.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct IdentitySecret([u8; 32]);

impl IdentitySecret {
    /// Raw secret bytes, as fed into nullifier derivation.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Derive the identity secret from the VMK's raw bytes.
///
/// Deterministic: one vault, one voting identity, for as long as the VMK
/// lives.
pub fn derive_identity_secret(vmk: &VaultMasterKey) -> IdentitySecret {
    // 32-byte HKDF output cannot be rejected; the fallback value is
    // unreachable.
    let okm = hkdf_sha256(vmk.as_bytes(), IDENTITY_HKDF_SALT, IDENTITY_HKDF_INFO)
        .unwrap_or([0u8; 32]);
    IdentitySecret(okm)
}
