//! `AuthUser` extractor that hands the verified caller to handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use learnhub_core::error::AppError;
use learnhub_service::context::RequestContext;

use crate::error::ApiError;

/// Authenticated caller, as placed in the request extensions by
/// [`crate::middleware::auth::require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthenticated("Missing token").into())
    }
}
