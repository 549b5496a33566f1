use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AttachmentUpload {
    #[validate(url(message = "File URL must be a valid URL"))]
    pub file_url: String,
    #[validate(length(min = 1, max = 100, message = "Content type is required"))]
    pub content_type: String,
    pub size_bytes: i64,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 5000, message = "Message content is required"))]
    pub content: String,
    #[serde(default)]
    pub attachment: Option<AttachmentUpload>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageDto {
    pub content: String,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
    pub sender: String,
    pub business_name: String,
    pub business_slug: String,
    /// Time of day the message was created, formatted "HH:MM".
    pub created_at: String,
    /// Whether the requesting party authored the message.
    pub is_sent: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationDto {
    pub conversation_id: Uuid,
    pub business_name: String,
    pub business_slug: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenChatResponse {
    pub conversation_id: Uuid,
    pub business_name: String,
    pub business_slug: String,
    pub messages: Vec<MessageDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InboxResponse {
    pub is_owner: bool,
    pub conversations: Vec<ConversationDto>,
}
