//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use learnhub_auth::jwt::{JwtDecoder, JwtEncoder};
use learnhub_auth::password::PasswordHasher;
use learnhub_core::config::AppConfig;
use learnhub_database::repositories::UserStore;
use learnhub_service::{AuthService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session token verifier
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and login
    pub auth_service: Arc<AuthService>,
    /// Profile lookups
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wires services around the given credential store.
    ///
    /// The signing secret is read from `config.auth` once here and is
    /// read-only afterwards.
    pub fn new(config: AppConfig, users: Arc<dyn UserStore>) -> Self {
        let hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            hasher,
            jwt_encoder,
        ));
        let user_service = Arc::new(UserService::new(users));

        Self {
            config: Arc::new(config),
            jwt_decoder,
            auth_service,
            user_service,
        }
    }
}
