//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use learnhub_entity::user::UserRole;
use learnhub_service::{Credentials, Registration};

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MessageResponse, UserSummary};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let role: UserRole = req.role.parse()?;

    state
        .auth_service
        .register(Registration {
            full_name: req.full_name,
            email: req.email,
            password: req.password,
            role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered".to_string(),
        }),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let role: UserRole = req.role.parse()?;

    let result = state
        .auth_service
        .login(Credentials {
            email: req.email,
            password: req.password,
            role,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: result.token.token,
        expires_at: result.token.expires_at,
        user: UserSummary::from(&result.user),
    }))
}
