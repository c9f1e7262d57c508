//! # Symmetric Encryption
//!
//! AES-256-GCM authenticated encryption for every tier of the key hierarchy:
//! KEK-wraps-VMK, VMK-wraps-DEK, DEK-encrypts-content.

use crate::CryptoError;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm,
};
use zeroize::Zeroize;

/// Secret key (256-bit). Zeroized on drop.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Generate random key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Nonce for encryption (96-bit, the GCM standard size).
#[derive(Clone)]
pub struct Nonce([u8; 12]);

impl Nonce {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Parse from a slice; fails unless exactly 12 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let bytes: [u8; 12] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidNonceLength {
                expected: 12,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }

    /// Generate random nonce.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 12];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

/// Encrypt plaintext with AES-256-GCM under a fresh random nonce.
///
/// Returns (ciphertext, nonce).
///
/// # Errors
///
/// Returns `CryptoError::EncryptionFailed` if encryption fails.
pub fn encrypt(key: &SecretKey, plaintext: &[u8]) -> Result<(Vec<u8>, Nonce), CryptoError> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let nonce = Nonce::generate();

    let ciphertext = cipher
        .encrypt(nonce.as_bytes().into(), plaintext)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    Ok((ciphertext, nonce))
}

/// Decrypt ciphertext with AES-256-GCM.
///
/// # Errors
///
/// Returns `CryptoError::DecryptionFailed` on any authentication failure. The
/// error carries no detail distinguishing a wrong key from a tampered
/// ciphertext.
pub fn decrypt(key: &SecretKey, ciphertext: &[u8], nonce: &Nonce) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    cipher
        .decrypt(nonce.as_bytes().into(), ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)
}
