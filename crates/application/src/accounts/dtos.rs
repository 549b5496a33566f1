use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ============ JWT Claims ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

// ============ Register / Login ============

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "crate::accounts::validate_username"))]
    pub username: String,
    #[validate(length(min = 8, max = 128, message = "Password must be between 8-128 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
    /// Checked against the Iranian mobile format in the use case.
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user_id: Uuid,
    pub username: String,
}

// ============ Profile ============

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub username: String,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub profile_picture: Option<String>,
    pub business_count: u64,
    pub avg_rating: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Checked against the Iranian mobile format in the use case.
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Profile picture must be a valid URL"))]
    pub profile_picture: Option<String>,
}
