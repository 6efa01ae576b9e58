//! # learnhub-auth
//!
//! Credential primitives for LearnHub.
//!
//! ## Modules
//!
//! - `jwt`: signed, time-limited session tokens (issue and verify)
//! - `password`: Argon2id password hashing and verification

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenError, TokenSubject};
pub use password::PasswordHasher;
