//! # Key Derivation
//!
//! Two derivation paths feed the key hierarchy:
//!
//! - **PBKDF2-HMAC-SHA256** stretches a user password into the password KEK.
//!   600k iterations; slow on purpose.
//! - **HKDF-SHA256** expands already-uniform key material: the authenticator
//!   PRF output into the biometric KEK, and the raw VMK into the identity
//!   secret. Salt and info labels give each derived key its own domain.

use crate::{CryptoError, SecretKey};
use hkdf::Hkdf;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

/// PBKDF2 iteration count for the password KEK.
pub const PBKDF2_ITERATIONS: u32 = 600_000;

/// Derive the password KEK: PBKDF2-HMAC-SHA256 over the password with the
/// per-user salt.
pub fn derive_password_kek(password: &str, salt: &[u8]) -> SecretKey {
    let mut okm = [0u8; 32];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut okm);
    SecretKey::from_bytes(okm)
}

/// HKDF-SHA256: extract-and-expand `ikm` under `salt`, labeled with `info`.
///
/// # Errors
///
/// Returns `CryptoError::KeyDerivationFailed` if the requested output length
/// is rejected by HKDF (cannot happen for the fixed 32-byte output).
pub fn hkdf_sha256(ikm: &[u8], salt: &[u8], info: &[u8]) -> Result<[u8; 32], CryptoError> {
    let hk = Hkdf::<Sha256>::new(Some(salt), ikm);
    let mut okm = [0u8; 32];
    hk.expand(info, &mut okm)
        .map_err(|e| CryptoError::KeyDerivationFailed(e.to_string()))?;
    Ok(okm)
}
