//! # Key Hierarchy
//!
//! VMK generation and the two KEK wrap/unwrap paths.

use crate::error::VaultError;
use crate::session::VaultSession;
use shared_crypto::{decrypt, derive_password_kek, encrypt, hkdf_sha256, Nonce, SecretKey};
use shared_types::VaultKeyMaterial;
use zeroize::Zeroizing;

/// Minimum accepted vault password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// PBKDF2 salt length for the password KEK.
pub const KEK_SALT_LEN: usize = 16;

/// HKDF salt for the biometric KEK. Versioned so a future rotation can derive
/// a new KEK from the same authenticator PRF output.
pub const VAULT_HKDF_SALT: &[u8] = b"vault-hkdf-salt-v1";

/// HKDF info label identifying the biometric KEK's purpose.
pub const VAULT_PRF_KEK_INFO: &[u8] = b"vault:kek:webauthn-pef:v1";

/// The top-tier Vault Master Key. Wraps per-item DEKs; is itself wrapped by
/// the password and biometric KEKs. Zeroized on drop; never persisted.
pub struct VaultMasterKey(SecretKey);

impl std::fmt::Debug for VaultMasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("VaultMasterKey").field(&"<redacted>").finish()
    }
}

impl VaultMasterKey {
    /// Generate a fresh random VMK.
    pub fn generate() -> Self {
        Self(SecretKey::generate())
    }

    /// Reconstruct from raw bytes (an unwrap result).
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(SecretKey::from_bytes(bytes))
    }

    /// Raw key bytes. Input to item wrapping and identity derivation.
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    pub(crate) fn secret(&self) -> &SecretKey {
        &self.0
    }
}

impl Clone for VaultMasterKey {
    fn clone(&self) -> Self {
        Self::from_bytes(*self.as_bytes())
    }
}

/// The secret presented to unlock a vault.
pub enum UnlockSecret<'a> {
    /// The vault password (PBKDF2 path).
    Password(&'a str),
    /// The authenticator PRF output (HKDF path).
    Biometric(&'a [u8]),
}

/// Create a vault: generate a VMK, wrap it under a password-derived KEK, and
/// install it in the session.
///
/// # Errors
///
/// `WeakPassword` if the password is shorter than [`MIN_PASSWORD_LEN`] or the
/// confirmation differs; `AlreadyInitialized` if the session already holds a
/// VMK.
pub fn create_vault(
    password: &str,
    confirmation: &str,
    session: &mut VaultSession,
) -> Result<VaultKeyMaterial, VaultError> {
    if password.len() < MIN_PASSWORD_LEN || password != confirmation {
        return Err(VaultError::WeakPassword);
    }
    if session.is_unlocked() {
        return Err(VaultError::AlreadyInitialized);
    }

    let vmk = VaultMasterKey::generate();

    let mut salt = [0u8; KEK_SALT_LEN];
    rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut salt);
    let kek = derive_password_kek(password, &salt);

    let (wrapped_vmk, iv) = encrypt(&kek, vmk.as_bytes())?;

    let material = VaultKeyMaterial {
        kek_salt: hex::encode(salt),
        wrapped_vmk: hex::encode(wrapped_vmk),
        vmk_iv: hex::encode(iv.as_bytes()),
        wrapped_vmk_prf: None,
        prf_vmk_iv: None,
    };

    session.install(vmk);
    Ok(material)
}

/// Enroll the biometric path: derive an independent KEK from the
/// authenticator PRF output and wrap the same VMK bytes under it.
///
/// May be invoked any time after `create_vault` once PRF capability is
/// confirmed (lazy commit).
pub fn enroll_biometric(
    vmk: &VaultMasterKey,
    prf_secret: &[u8],
    material: &mut VaultKeyMaterial,
) -> Result<(), VaultError> {
    let kek = SecretKey::from_bytes(hkdf_sha256(prf_secret, VAULT_HKDF_SALT, VAULT_PRF_KEK_INFO)?);
    let (wrapped, iv) = encrypt(&kek, vmk.as_bytes())?;

    material.wrapped_vmk_prf = Some(hex::encode(wrapped));
    material.prf_vmk_iv = Some(hex::encode(iv.as_bytes()));
    Ok(())
}

/// Unwrap the VMK with either unlock secret.
///
/// # Errors
///
/// `Authentication` on any decode or authenticated-decryption failure — the
/// error never distinguishes a wrong secret from corrupted key material.
/// `BiometricNotEnrolled` if the biometric path is requested before
/// [`enroll_biometric`] has committed a PRF wrap.
pub fn unwrap_vault(
    secret: UnlockSecret<'_>,
    material: &VaultKeyMaterial,
) -> Result<VaultMasterKey, VaultError> {
    let (kek, wrapped_hex, iv_hex) = match secret {
        UnlockSecret::Password(password) => {
            let salt = decode_hex(&material.kek_salt)?;
            (
                derive_password_kek(password, &salt),
                material.wrapped_vmk.as_str(),
                material.vmk_iv.as_str(),
            )
        }
        UnlockSecret::Biometric(prf_secret) => {
            let (wrapped, iv) = match (&material.wrapped_vmk_prf, &material.prf_vmk_iv) {
                (Some(wrapped), Some(iv)) => (wrapped.as_str(), iv.as_str()),
                _ => return Err(VaultError::BiometricNotEnrolled),
            };
            let kek = SecretKey::from_bytes(
                hkdf_sha256(prf_secret, VAULT_HKDF_SALT, VAULT_PRF_KEK_INFO)
                    .map_err(|_| VaultError::Authentication)?,
            );
            (kek, wrapped, iv)
        }
    };

    let wrapped = decode_hex(wrapped_hex)?;
    let iv = Nonce::from_slice(&decode_hex(iv_hex)?).map_err(|_| VaultError::Authentication)?;

    let raw = Zeroizing::new(decrypt(&kek, &wrapped, &iv).map_err(|_| VaultError::Authentication)?);
    let bytes: [u8; 32] = raw
        .as_slice()
        .try_into()
        .map_err(|_| VaultError::Authentication)?;

    Ok(VaultMasterKey::from_bytes(bytes))
}

fn decode_hex(s: &str) -> Result<Vec<u8>, VaultError> {
    hex::decode(s).map_err(|_| VaultError::Authentication)
}
