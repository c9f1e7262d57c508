//! Vault error types.

use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors from vault key operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Password too short or confirmation mismatch.
    #[error("Password must be at least 8 characters and match its confirmation")]
    WeakPassword,

    /// The session already holds a resident VMK.
    #[error("Vault Master Key already resident in this session")]
    AlreadyInitialized,

    /// Unwrapping failed. Deliberately cause-blind: a wrong secret and a
    /// corrupted ciphertext produce this same message.
    #[error("Vault authentication failed")]
    Authentication,

    /// Biometric unlock requested but no PRF wrap is enrolled.
    #[error("No biometric wrap enrolled for this vault")]
    BiometricNotEnrolled,

    /// Underlying cryptographic failure outside the unwrap path.
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
