//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Longest session token lifetime the server accepts (one day).
pub const MAX_TOKEN_TTL_MINUTES: u64 = 24 * 60;

/// Authentication and session-token configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
    /// Session token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_minutes: default_token_ttl(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

fn default_token_ttl() -> u64 {
    60
}
