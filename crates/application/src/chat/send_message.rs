use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{instrument, warn};
use uuid::Uuid;
use validator::Validate;

use kasbyar_core::entities::{businesses, conversations, messages, users};

use super::attachment::{classify_attachment, validate_attachment};
use super::dtos::{MessageDto, SendMessageRequest};
use super::list_messages::ensure_party;
use crate::{AppError, AppResult};

#[cfg(test)]
#[path = "use_cases_test.rs"]
mod tests;

const SEQ_INSERT_ATTEMPTS: u32 = 3;

pub struct SendMessageUseCase;

impl SendMessageUseCase {
    #[instrument(skip(db, req), fields(conversation_id = %conversation_id))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: Uuid,
        conversation_id: Uuid,
        req: SendMessageRequest,
    ) -> AppResult<MessageDto> {
        req.validate()?;
        if let Some(attachment) = &req.attachment {
            attachment.validate()?;
            validate_attachment(&attachment.content_type, attachment.size_bytes)?;
        }

        let conversation = conversations::Entity::find_by_id(conversation_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Conversation not found".to_string()))?;

        let business = businesses::Entity::find_by_id(conversation.business_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        ensure_party(&conversation, &business, user_id)?;

        let sender = users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let (file_url, file_type) = match &req.attachment {
            Some(attachment) => (
                Some(attachment.file_url.clone()),
                Some(classify_attachment(&attachment.content_type)),
            ),
            None => (None, None),
        };

        // Seq assignment races under concurrent senders; the unique
        // (conversation_id, seq) index rejects the loser, which re-reads the
        // high-water mark and tries again.
        let mut attempt = 0;
        let message = loop {
            attempt += 1;
            match Self::try_append(db, &conversation, &req.content, &file_url, &file_type, user_id)
                .await
            {
                Ok(message) => break message,
                Err(AppError::Database(e))
                    if AppError::is_unique_violation(&e) && attempt < SEQ_INSERT_ATTEMPTS =>
                {
                    warn!("Seq collision on append, retrying (attempt {})", attempt);
                    continue;
                }
                Err(e) => return Err(e),
            }
        };

        Ok(MessageDto {
            content: message.content,
            file_url: message.file_url,
            file_type: message.file_type,
            sender: sender.username,
            business_name: business.name,
            business_slug: business.slug,
            created_at: message.created_at.format("%H:%M").to_string(),
            is_sent: true,
        })
    }

    async fn try_append(
        db: &DatabaseConnection,
        conversation: &conversations::Model,
        content: &str,
        file_url: &Option<String>,
        file_type: &Option<String>,
        sender_id: Uuid,
    ) -> AppResult<messages::Model> {
        let txn = db.begin().await?;

        let last = messages::Entity::find()
            .filter(messages::Column::ConversationId.eq(conversation.conversation_id))
            .order_by_desc(messages::Column::Seq)
            .one(&txn)
            .await?;
        let next_seq = last.map(|m| m.seq + 1).unwrap_or(1);

        let row = messages::ActiveModel {
            conversation_id: Set(conversation.conversation_id),
            sender_id: Set(sender_id),
            content: Set(content.to_string()),
            file_url: Set(file_url.clone()),
            file_type: Set(file_type.clone()),
            seq: Set(next_seq),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };
        let inserted = row.insert(&txn).await?;

        let mut active: conversations::ActiveModel = conversation.clone().into();
        active.updated_at = Set(Utc::now().into());
        active.update(&txn).await?;

        txn.commit().await?;
        Ok(inserted)
    }
}
