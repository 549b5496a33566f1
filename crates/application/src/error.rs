use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication errors (401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Authorization errors (403)
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Validation errors (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Not found errors (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Conflict errors (409) - e.g. duplicate unique key
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database errors (500 or mapped)
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Cryptographic errors (500)
    #[error("Cryptographic error: {0}")]
    Cryptographic(String),

    /// Internal server errors (500)
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl AppError {
    /// Get HTTP status code for the error
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Authentication(_) => 401,
            AppError::Authorization(_) => 403,
            AppError::Validation(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Conflict(_) => 409,
            AppError::Database(e) => match e {
                sea_orm::DbErr::RecordNotFound(_) => 404,
                e if Self::is_unique_violation(e) => 409,
                _ => 500,
            },
            AppError::Internal(_) | AppError::Cryptographic(_) => 500,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Authentication(_) => "AUTHENTICATION_FAILED",
            AppError::Authorization(_) => "AUTHORIZATION_FAILED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) | AppError::Database(sea_orm::DbErr::RecordNotFound(_)) => {
                "NOT_FOUND"
            }
            AppError::Conflict(_) => "CONFLICT",
            AppError::Database(e) if Self::is_unique_violation(e) => "CONFLICT",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Cryptographic(_) => "CRYPTOGRAPHIC_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether a database error is the unique-constraint backstop firing
    /// (SQLSTATE 23505 on PostgreSQL) rather than a genuine failure.
    pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
        let text = err.to_string();
        text.contains("duplicate key value") || text.contains("unique constraint")
    }
}

// Additional From implementations for conversion

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Authentication(format!("JWT error: {}", err))
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::Cryptographic(format!("Password hashing error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| "validation failed".to_string())
                    )
                })
            })
            .collect();
        AppError::Validation(messages.join(", "))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::Validation(format!("Invalid UUID: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;
