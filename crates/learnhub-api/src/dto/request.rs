//! Request DTOs with validation.
//!
//! Fields default to empty so a missing key and a blank value surface as the
//! same field-level validation error.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

/// Registration request body.
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Full name.
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "full_name is required"))]
    pub full_name: String,
    /// Email.
    #[serde(default)]
    #[validate(
        length(min = 1, message = "email is required"),
        custom(function = "padded_email")
    )]
    pub email: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Role: `student` or `teacher`.
    #[serde(default)]
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

/// Login request body.
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Role: `student` or `teacher`.
    #[serde(default)]
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

/// Email syntax check on the trimmed value; the service trims before storing.
fn padded_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email")
            .with_message(Cow::Borrowed("email is not a valid address")))
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"****")
            .field("role", &self.role)
            .finish()
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"****")
            .field("role", &self.role)
            .finish()
    }
}
