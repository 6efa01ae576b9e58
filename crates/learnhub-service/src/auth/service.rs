//! Registration and login orchestration.

use std::sync::Arc;

use tracing::{info, warn};

use learnhub_auth::jwt::{IssuedToken, JwtEncoder, TokenSubject};
use learnhub_auth::password::PasswordHasher;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_database::repositories::{DUPLICATE_ACCOUNT_MESSAGE, UserStore};
use learnhub_entity::user::{CreateUser, User, UserRole};

/// Message for every failed login, whatever the cause.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Input for a new account.
#[derive(Clone)]
pub struct Registration {
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password. Lives only for the request.
    pub password: String,
    /// Requested role.
    pub role: UserRole,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"****")
            .field("role", &self.role)
            .finish()
    }
}

/// Login input.
#[derive(Clone)]
pub struct Credentials {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Role the caller is signing in as.
    pub role: UserRole,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"****")
            .field("role", &self.role)
            .finish()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// Session token for subsequent requests.
    pub token: IssuedToken,
}

/// Handles account registration and credential login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Credential store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Session token encoder.
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Registers a new `(email, role)` account.
    ///
    /// Fails with `Conflict` if the pair is already taken, including when a
    /// concurrent registration wins the insert. No token is issued.
    pub async fn register(&self, registration: Registration) -> AppResult<User> {
        let full_name = required("full_name", &registration.full_name)?.to_string();
        let email = normalize_email(&registration.email)?;
        if registration.password.is_empty() {
            return Err(AppError::validation("password is required"));
        }

        if self
            .users
            .find_by_email_and_role(&email, registration.role)
            .await?
            .is_some()
        {
            info!(role = %registration.role, "Registration rejected: account exists");
            return Err(AppError::conflict(DUPLICATE_ACCOUNT_MESSAGE));
        }

        let password_hash = self.hash(registration.password).await?;

        let user = self
            .users
            .create(CreateUser {
                full_name,
                email,
                role: registration.role,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Checks credentials and issues a session token.
    ///
    /// An unknown account and a wrong password produce the same
    /// `Unauthorized` error after the same amount of hashing work.
    pub async fn login(&self, credentials: Credentials) -> AppResult<LoginResult> {
        let email = normalize_email(&credentials.email)?;
        if credentials.password.is_empty() {
            return Err(AppError::validation("password is required"));
        }

        let user = self
            .users
            .find_by_email_and_role(&email, credentials.role)
            .await?;

        let Some(user) = user else {
            self.verify_dummy(credentials.password).await?;
            warn!(role = %credentials.role, "Login failed");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self
            .verify(credentials.password, user.password_hash.clone())
            .await?
        {
            warn!(user_id = %user.id, "Login failed");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = self.encoder.issue(&TokenSubject::from(&user))?;

        info!(user_id = %user.id, role = %user.role, "Login successful");
        Ok(LoginResult { user, token })
    }

    async fn hash(&self, password: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    async fn verify(&self, password: String, hash: String) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
    }

    async fn verify_dummy(&self, password: String) -> AppResult<()> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_dummy(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
    }
}

/// Trims `value`, failing if nothing is left.
fn required<'a>(field: &str, value: &'a str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Trims and lowercases an email, rejecting values without a local part and domain.
fn normalize_email(raw: &str) -> AppResult<String> {
    let email = required("email", raw)?.to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::validation("email is not a valid address")),
    }
}
