//! # learnhub-api
//!
//! HTTP API layer for LearnHub built on Axum.
//!
//! Provides the registration, login, and profile endpoints, the bearer-token
//! middleware that guards protected routes, extractors, DTOs, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
