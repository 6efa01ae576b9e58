//! # learnhub-service
//!
//! Use-case layer for LearnHub. Each service orchestrates the credential
//! store, password hasher, and token encoder.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod user;

pub use auth::{AuthService, Credentials, LoginResult, Registration};
pub use context::RequestContext;
pub use user::UserService;
