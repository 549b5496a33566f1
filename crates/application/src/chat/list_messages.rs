use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use kasbyar_core::entities::{businesses, conversations, messages, users};

use super::dtos::MessageDto;
use crate::{AppError, AppResult};

pub struct ListMessagesUseCase;

impl ListMessagesUseCase {
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: Uuid,
        conversation_id: Uuid,
    ) -> AppResult<Vec<MessageDto>> {
        let conversation = conversations::Entity::find_by_id(conversation_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Conversation not found".to_string()))?;

        let business = businesses::Entity::find_by_id(conversation.business_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        ensure_party(&conversation, &business, user_id)?;

        load_message_dtos(db, conversation_id, &business, user_id).await
    }
}

/// Either side of the thread: the initiating user or the business owner.
pub(super) fn ensure_party(
    conversation: &conversations::Model,
    business: &businesses::Model,
    user_id: Uuid,
) -> AppResult<()> {
    if conversation.user_id != user_id && business.owner_id != user_id {
        return Err(AppError::Authorization("Access denied".to_string()));
    }
    Ok(())
}

/// Full dump of a conversation, oldest first. Rows created in the same
/// second keep their insertion order through the per-conversation seq.
pub(super) async fn load_message_dtos(
    db: &DatabaseConnection,
    conversation_id: Uuid,
    business: &businesses::Model,
    viewer: Uuid,
) -> AppResult<Vec<MessageDto>> {
    let rows = messages::Entity::find()
        .filter(messages::Column::ConversationId.eq(conversation_id))
        .find_also_related(users::Entity)
        .order_by_asc(messages::Column::CreatedAt)
        .order_by_asc(messages::Column::Seq)
        .all(db)
        .await?;

    let mut result = Vec::with_capacity(rows.len());
    for (message, sender) in rows {
        let sender = sender
            .ok_or_else(|| AppError::NotFound("Message sender not found".to_string()))?;
        result.push(MessageDto {
            is_sent: message.sender_id == viewer,
            content: message.content,
            file_url: message.file_url,
            file_type: message.file_type,
            sender: sender.username,
            business_name: business.name.clone(),
            business_slug: business.slug.clone(),
            created_at: message.created_at.format("%H:%M").to_string(),
        });
    }

    Ok(result)
}
