//! Bearer-token gate for protected routes.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use learnhub_core::error::AppError;
use learnhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects the request unless it carries a valid session token.
///
/// - no header, or not `Bearer <token>` → `401 Unauthenticated`
/// - token fails verification for any reason → `403 Forbidden`
///
/// On success the verified [`RequestContext`] is stored in the request
/// extensions for the [`crate::extractors::AuthUser`] extractor.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;

    let claims = state.jwt_decoder.verify(token).map_err(|reason| {
        debug!(%reason, "Rejected session token");
        AppError::forbidden("Invalid token")
    })?;

    request
        .extensions_mut()
        .insert(RequestContext::from(claims));

    Ok(next.run(request).await)
}

/// Extracts the token from `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthenticated("Missing token"))?
        .to_str()
        .map_err(|_| AppError::unauthenticated("Malformed Authorization header"))?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or_else(|| AppError::unauthenticated("Malformed Authorization header"))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::unauthenticated("Malformed Authorization header"));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::unauthenticated("Missing token"));
    }

    Ok(token)
}
