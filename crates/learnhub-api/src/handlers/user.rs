//! Profile handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::ProfileResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ProfileResponse::from(user)))
}
