//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered account. The `(email, role)` pair is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name as entered at registration.
    pub full_name: String,
    /// Normalized (trimmed, lowercase) email address.
    pub email: String,
    /// Account role.
    pub role: UserRole,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// First whitespace-separated part of the full name.
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or("")
    }

    /// Everything after the first name, single-spaced.
    pub fn last_name(&self) -> String {
        self.full_name
            .split_whitespace()
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Full name.
    pub full_name: String,
    /// Normalized email address.
    pub email: String,
    /// Requested role.
    pub role: UserRole,
    /// Pre-hashed password.
    pub password_hash: String,
}

impl CreateUser {
    /// Materializes the row that will be inserted, with a fresh id.
    pub fn into_user(self) -> User {
        User {
            id: Uuid::now_v7(),
            full_name: self.full_name,
            email: self.email,
            role: self.role,
            password_hash: self.password_hash,
            created_at: Utc::now(),
        }
    }
}
