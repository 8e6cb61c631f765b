use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public identity of a user, safe to embed in responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    pub user_id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.len() < 8 || !password.chars().any(|c| c.is_ascii_digit()) {
        let mut error = ValidationError::new("password_strength");
        error.message = Some(
            "Password must be at least 8 characters long and contain at least one number".into(),
        );
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_valid_registration() {
        assert!(register("lifter@example.com", "benchpress1").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(register("not-an-email", "benchpress1").validate().is_err());
    }

    #[test]
    fn rejects_short_password() {
        assert!(register("lifter@example.com", "abc1").validate().is_err());
    }

    #[test]
    fn rejects_password_without_digit() {
        assert!(register("lifter@example.com", "benchpress").validate().is_err());
    }
}
