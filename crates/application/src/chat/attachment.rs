use crate::{AppError, AppResult};

pub const MAX_ATTACHMENT_BYTES: i64 = 10 * 1024 * 1024;

/// Primary content-type tokens an attachment may declare. The accepted
/// application subtypes are PDF/DOC/DOCX on the client side; the server
/// gate matches the original contract and checks the primary token.
const ALLOWED_PRIMARY: [&str; 3] = ["image", "video", "application"];

fn primary_token(content_type: &str) -> &str {
    content_type.split('/').next().unwrap_or("")
}

/// Form-level attachment gate: runs before anything is persisted.
pub fn validate_attachment(content_type: &str, size_bytes: i64) -> AppResult<()> {
    if !ALLOWED_PRIMARY.contains(&primary_token(content_type)) {
        return Err(AppError::Validation(
            "Only images, videos and PDF/DOC/DOCX files are allowed".to_string(),
        ));
    }
    if size_bytes > MAX_ATTACHMENT_BYTES {
        return Err(AppError::Validation(
            "File size must not exceed 10 MB".to_string(),
        ));
    }
    Ok(())
}

/// Stored `file_type` category: the declared content-type's primary token
/// when recognized, a generic "file" otherwise.
pub fn classify_attachment(content_type: &str) -> String {
    let token = primary_token(content_type);
    if ALLOWED_PRIMARY.contains(&token) {
        token.to_string()
    } else {
        "file".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_categories() {
        assert_eq!(classify_attachment("image/png"), "image");
        assert_eq!(classify_attachment("video/mp4"), "video");
        assert_eq!(classify_attachment("application/pdf"), "application");
    }

    #[test]
    fn test_classify_unknown_falls_back_to_file() {
        assert_eq!(classify_attachment("audio/mpeg"), "file");
        assert_eq!(classify_attachment("text/plain"), "file");
        assert_eq!(classify_attachment("weird"), "file");
    }

    #[test]
    fn test_validate_rejects_disallowed_type() {
        assert!(validate_attachment("audio/mpeg", 1024).is_err());
        assert!(validate_attachment("text/html", 1024).is_err());
    }

    #[test]
    fn test_validate_rejects_oversize() {
        assert!(validate_attachment("image/jpeg", MAX_ATTACHMENT_BYTES + 1).is_err());
        assert!(validate_attachment("image/jpeg", MAX_ATTACHMENT_BYTES).is_ok());
    }
}
