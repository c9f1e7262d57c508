//! Node configuration from the environment.

use std::env;

/// Development fallback for the operator key; startup warns when it is live.
const DEV_MANAGE_API_KEY: &str = "dev-operator-key";

/// Node runtime configuration.
#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// Listen address for the HTTP gateway.
    pub bind_addr: String,
    /// Static session token accepted by the gateway (stand-in for the
    /// external auth collaborator).
    pub session_token: String,
    /// Operator key for the manage surface.
    pub manage_api_key: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            session_token: "dev-session-token".to_string(),
            manage_api_key: DEV_MANAGE_API_KEY.to_string(),
        }
    }
}

impl NodeConfig {
    /// Build from `MORA_BIND_ADDR` / `MORA_SESSION_TOKEN` /
    /// `MORA_MANAGE_API_KEY`, falling back to development defaults.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            bind_addr: env::var("MORA_BIND_ADDR").unwrap_or(default.bind_addr),
            session_token: env::var("MORA_SESSION_TOKEN").unwrap_or(default.session_token),
            manage_api_key: env::var("MORA_MANAGE_API_KEY").unwrap_or(default.manage_api_key),
        }
    }

    /// Whether the operator key is still the development fallback.
    pub fn uses_default_manage_key(&self) -> bool {
        self.manage_api_key == DEV_MANAGE_API_KEY
    }
}
