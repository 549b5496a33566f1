use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Iranian mobile format: 09 followed by nine digits
pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^09\d{9}$").unwrap());

/// Username: alphanumeric, underscore, dot, hyphen, 3-150 chars
pub static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.-]{3,150}$").unwrap());

/// Custom validator for phone number
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone_number"))
    }
}

/// Custom validator for username
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if USERNAME_REGEX.is_match(username) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_username"))
    }
}
