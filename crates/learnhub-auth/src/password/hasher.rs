//! Argon2id password hashing and verification.

use std::sync::OnceLock;

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::warn;

use learnhub_core::error::AppError;

/// Plaintext behind the dummy hash used to equalize login timing.
const TIMING_GUARD_PLAINTEXT: &str = "learnhub-timing-guard";

/// Well-formed Argon2id hash at default cost, used if the guard cannot be built.
const TIMING_GUARD_FALLBACK: &str = "$argon2id$v=19$m=19456,t=2,p=1$igxZioJxS9fegrO15PQfeQ$SlLkZ1dHUibFZKw60xPb7JrsmArVRuaOPgf3fCapeUg";

/// Handles password hashing and verification using Argon2id.
///
/// Cost parameters are the `argon2` crate defaults and are not configurable,
/// so every stored hash was produced at the same work factor.
#[derive(Debug, Default)]
pub struct PasswordHasher {
    /// Lazily computed hash verified against when an account does not exist.
    timing_guard: OnceLock<String>,
}

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Returns `false` for a mismatch and for a stored hash that cannot be
    /// parsed; it never fails.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Runs one verification against a fixed hash and discards the result.
    ///
    /// Called on the unknown-account login path so it costs the same as a
    /// wrong-password attempt.
    pub fn verify_dummy(&self, password: &str) {
        let hash = self.timing_guard.get_or_init(|| {
            self.hash_password(TIMING_GUARD_PLAINTEXT)
                .unwrap_or_else(|e| {
                    warn!(error = %e, "Falling back to static timing guard hash");
                    TIMING_GUARD_FALLBACK.to_string()
                })
        });
        let _ = self.verify_password(password, hash);
    }
}
