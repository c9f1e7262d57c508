//! # Vault Session
//!
//! Session-scoped residency for the unwrapped VMK. The key is handed to every
//! cryptographic call explicitly through this object — there is no
//! process-wide holder — and `clear()` on logout drops (and zeroizes) it.

use crate::hierarchy::VaultMasterKey;

/// Holds the resident VMK for the lifetime of one authenticated session.
#[derive(Default)]
pub struct VaultSession {
    vmk: Option<VaultMasterKey>,
}

impl VaultSession {
    /// A locked session with no resident key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a VMK is resident.
    pub fn is_unlocked(&self) -> bool {
        self.vmk.is_some()
    }

    /// Make `vmk` resident, replacing any previous key.
    pub fn install(&mut self, vmk: VaultMasterKey) {
        self.vmk = Some(vmk);
    }

    /// The resident VMK, if any. Callers must not stash the reference beyond
    /// the current operation.
    pub fn vmk(&self) -> Option<&VaultMasterKey> {
        self.vmk.as_ref()
    }

    /// Drop the resident key (logout). The key bytes are zeroized by the
    /// key's own drop.
    pub fn clear(&mut self) {
        self.vmk = None;
    }
}
