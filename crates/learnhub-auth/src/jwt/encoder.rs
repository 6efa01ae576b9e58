//! Session token creation with a configurable TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use learnhub_core::config::{AuthConfig, MAX_TOKEN_TTL_MINUTES};
use learnhub_core::error::AppError;

use super::claims::{Claims, TokenSubject};

/// Creates signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// A freshly signed token and the instant it stops being accepted.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// Compact JWT.
    pub token: String,
    /// Absolute expiry.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// The TTL is capped at [`MAX_TOKEN_TTL_MINUTES`]; config validation
    /// rejects larger values before this point.
    pub fn new(config: &AuthConfig) -> Self {
        let minutes = config.token_ttl_minutes.min(MAX_TOKEN_TTL_MINUTES);
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::minutes(minutes as i64),
        }
    }

    /// Issues a token for `subject` that expires one TTL from now.
    pub fn issue(&self, subject: &TokenSubject) -> Result<IssuedToken, AppError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        subject: &TokenSubject,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let expires_at = now + self.ttl;

        let claims = Claims {
            sub: subject.id,
            email: subject.email.clone(),
            role: subject.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
