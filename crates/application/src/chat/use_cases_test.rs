#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use kasbyar_core::entities::{businesses, conversations};

    use crate::chat::dtos::{AttachmentUpload, SendMessageRequest};
    use crate::chat::list_messages::ListMessagesUseCase;
    use crate::chat::open_conversation::OpenConversationUseCase;
    use crate::chat::send_message::SendMessageUseCase;
    use crate::AppError;

    fn business(owner_id: Uuid) -> businesses::Model {
        businesses::Model {
            business_id: Uuid::new_v4(),
            owner_id,
            name: "کافه میزبان".to_string(),
            slug: "کافه-میزبان".to_string(),
            category_id: None,
            description: "قهوه و کیک".to_string(),
            address: "خیابان ولیعصر".to_string(),
            city: "تهران".to_string(),
            district: None,
            phone: "09123456789".to_string(),
            instagram: None,
            is_approved: true,
            created_at: Utc::now().into(),
        }
    }

    fn conversation(business_id: Uuid, user_id: Uuid) -> conversations::Model {
        conversations::Model {
            conversation_id: Uuid::new_v4(),
            business_id,
            user_id,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_send_message_denied_for_stranger() {
        let owner = Uuid::new_v4();
        let participant = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let biz = business(owner);
        let conv = conversation(biz.business_id, participant);
        let conversation_id = conv.conversation_id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![conv]])
            .append_query_results([vec![biz]])
            .into_connection();

        let req = SendMessageRequest {
            content: "سلام".to_string(),
            attachment: None,
        };
        let err = SendMessageUseCase::execute(&db, stranger, conversation_id, req)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[tokio::test]
    async fn test_fetch_messages_denied_for_stranger() {
        let owner = Uuid::new_v4();
        let participant = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let biz = business(owner);
        let conv = conversation(biz.business_id, participant);
        let conversation_id = conv.conversation_id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![conv]])
            .append_query_results([vec![biz]])
            .into_connection();

        let err = ListMessagesUseCase::execute(&db, stranger, conversation_id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[tokio::test]
    async fn test_owner_cannot_open_chat_on_own_listing() {
        let owner = Uuid::new_v4();
        let biz = business(owner);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![biz]])
            .into_connection();

        let err = OpenConversationUseCase::execute(&db, owner, "کافه-میزبان")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_send_message_rejects_disallowed_attachment() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let req = SendMessageRequest {
            content: "فایل صوتی".to_string(),
            attachment: Some(AttachmentUpload {
                file_url: "https://cdn.example.com/track.mp3".to_string(),
                content_type: "audio/mpeg".to_string(),
                size_bytes: 1024,
            }),
        };
        let err = SendMessageUseCase::execute(&db, Uuid::new_v4(), Uuid::new_v4(), req)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_send_message_rejects_oversize_attachment() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let req = SendMessageRequest {
            content: "عکس".to_string(),
            attachment: Some(AttachmentUpload {
                file_url: "https://cdn.example.com/huge.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                size_bytes: 11 * 1024 * 1024,
            }),
        };
        let err = SendMessageUseCase::execute(&db, Uuid::new_v4(), Uuid::new_v4(), req)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
