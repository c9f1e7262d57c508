//! Session and operator authentication.
//!
//! The session ceremony itself (WebAuthn, cookies, registration gating) is an
//! external collaborator; the gateway only checks the opaque token it hands
//! out. Both checks compare in constant time.

use subtle::ConstantTimeEq;

/// Header carrying the session token.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Header carrying the operator key for the manage surface.
pub const MANAGE_API_KEY_HEADER: &str = "x-api-key";

/// Validates opaque session tokens issued by the external auth collaborator.
pub trait SessionValidator: Send + Sync {
    /// Whether `token` identifies a live session.
    fn is_valid(&self, token: &str) -> bool;
}

/// Single-token validator used by the node binary and tests. Real
/// deployments plug a session-store-backed implementation in instead.
pub struct StaticTokenValidator {
    token: String,
}

impl StaticTokenValidator {
    /// Accept exactly `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl SessionValidator for StaticTokenValidator {
    fn is_valid(&self, token: &str) -> bool {
        constant_time_eq(token.as_bytes(), self.token.as_bytes())
    }
}

/// Constant-time byte comparison. Length differences return early — the
/// length of a token is not a secret.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
