//! Session token encoding, decoding, and claims.
//!
//! Tokens are stateless HS256 JWTs. Nothing is stored server-side, so a
//! token stays valid until its `exp` passes.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TokenSubject};
pub use decoder::{JwtDecoder, TokenError};
pub use encoder::{IssuedToken, JwtEncoder};
