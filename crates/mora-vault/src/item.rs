//! # Item Envelopes
//!
//! Per-item data keys. Each wrapped item carries its own fresh DEK, itself
//! wrapped under the VMK, so rotating or revoking one item never touches
//! another. The storage collaborator persists envelopes opaquely.

use crate::error::VaultError;
use crate::hierarchy::VaultMasterKey;
use shared_crypto::{decrypt, encrypt, Nonce, SecretKey};
use zeroize::Zeroizing;

/// An encrypted item plus its wrapped data key.
#[derive(Clone)]
pub struct ItemEnvelope {
    /// Item ciphertext under the DEK.
    pub ciphertext: Vec<u8>,
    /// Nonce for `ciphertext`.
    pub iv: [u8; 12],
    /// DEK ciphertext under the VMK.
    pub wrapped_dek: Vec<u8>,
    /// Nonce for `wrapped_dek`.
    pub dek_iv: [u8; 12],
}

/// Encrypt `plaintext` under a fresh DEK and wrap the DEK under the VMK.
pub fn wrap_item(plaintext: &[u8], vmk: &VaultMasterKey) -> Result<ItemEnvelope, VaultError> {
    let dek = SecretKey::generate();

    let (ciphertext, iv) = encrypt(&dek, plaintext)?;
    let (wrapped_dek, dek_iv) = encrypt(vmk.secret(), dek.as_bytes())?;

    Ok(ItemEnvelope {
        ciphertext,
        iv: *iv.as_bytes(),
        wrapped_dek,
        dek_iv: *dek_iv.as_bytes(),
    })
}

/// Unwrap the DEK under the VMK, then decrypt the item.
///
/// # Errors
///
/// `Authentication` on any decryption failure at either tier.
pub fn unwrap_item(envelope: &ItemEnvelope, vmk: &VaultMasterKey) -> Result<Vec<u8>, VaultError> {
    let raw_dek = Zeroizing::new(
        decrypt(
            vmk.secret(),
            &envelope.wrapped_dek,
            &Nonce::from_bytes(envelope.dek_iv),
        )
        .map_err(|_| VaultError::Authentication)?,
    );
    let dek_bytes: [u8; 32] = raw_dek
        .as_slice()
        .try_into()
        .map_err(|_| VaultError::Authentication)?;
    let dek = SecretKey::from_bytes(dek_bytes);

    decrypt(&dek, &envelope.ciphertext, &Nonce::from_bytes(envelope.iv))
        .map_err(|_| VaultError::Authentication)
}
