#[cfg(test)]
mod tests {
    use crate::accounts::dtos::*;
    use validator::Validate;

    #[test]
    fn test_register_validation() {
        // Valid request
        let valid_req = RegisterRequest {
            username: "kasb_owner".to_string(),
            password: "s3cret-passw0rd".to_string(),
            confirm_password: "s3cret-passw0rd".to_string(),
            phone_number: Some("09123456789".to_string()),
            city: Some("تهران".to_string()),
        };
        assert!(valid_req.validate().is_ok());

        // Password too short
        let invalid_req = RegisterRequest {
            username: "kasb_owner".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            phone_number: None,
            city: None,
        };
        assert!(invalid_req.validate().is_err());

        // Passwords don't match
        let invalid_req2 = RegisterRequest {
            username: "kasb_owner".to_string(),
            password: "s3cret-passw0rd".to_string(),
            confirm_password: "different-passw0rd".to_string(),
            phone_number: None,
            city: None,
        };
        assert!(invalid_req2.validate().is_err());

        // Username with disallowed characters
        let invalid_req3 = RegisterRequest {
            username: "no spaces!".to_string(),
            password: "s3cret-passw0rd".to_string(),
            confirm_password: "s3cret-passw0rd".to_string(),
            phone_number: None,
            city: None,
        };
        assert!(invalid_req3.validate().is_err());
    }

    #[test]
    fn test_phone_number_validation() {
        use crate::accounts::validate_phone_number;

        assert!(validate_phone_number("09351112233").is_ok());
        // Landline-style number is rejected
        assert!(validate_phone_number("02112345678").is_err());
        // Too short
        assert!(validate_phone_number("0912345").is_err());
        // International prefix form is rejected
        assert!(validate_phone_number("+989123456789").is_err());
    }

    #[test]
    fn test_update_profile_validation() {
        let valid = UpdateProfileRequest {
            phone_number: None,
            city: Some("مشهد".to_string()),
            profile_picture: Some("https://example.com/me.jpg".to_string()),
        };
        assert!(valid.validate().is_ok());

        let invalid = UpdateProfileRequest {
            phone_number: None,
            city: None,
            profile_picture: Some("not-a-url".to_string()),
        };
        assert!(invalid.validate().is_err());
    }
}
