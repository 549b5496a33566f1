use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{info, instrument};
use uuid::Uuid;

use kasbyar_core::entities::{businesses, conversations};

use super::dtos::OpenChatResponse;
use super::list_messages::load_message_dtos;
use crate::{AppError, AppResult};

pub struct OpenConversationUseCase;

impl OpenConversationUseCase {
    /// Fetch-or-create the single thread between a business and a visitor.
    /// Idempotent: the first visit creates the row, every later visit
    /// returns the same one.
    #[instrument(skip(db), fields(slug = %slug))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: Uuid,
        slug: &str,
    ) -> AppResult<OpenChatResponse> {
        let business = businesses::Entity::find()
            .filter(businesses::Column::Slug.eq(slug))
            .filter(businesses::Column::IsApproved.eq(true))
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        if business.owner_id == user_id {
            return Err(AppError::Validation(
                "Owners read their threads from the inbox".to_string(),
            ));
        }

        let existing = conversations::Entity::find()
            .filter(conversations::Column::BusinessId.eq(business.business_id))
            .filter(conversations::Column::UserId.eq(user_id))
            .one(db)
            .await?;

        let conversation = match existing {
            Some(conversation) => conversation,
            None => {
                let now = Utc::now();
                let row = conversations::ActiveModel {
                    conversation_id: Set(Uuid::new_v4()),
                    business_id: Set(business.business_id),
                    user_id: Set(user_id),
                    created_at: Set(now.into()),
                    updated_at: Set(now.into()),
                };
                match row.insert(db).await {
                    Ok(inserted) => {
                        info!("Conversation opened for business {}", business.business_id);
                        inserted
                    }
                    // A concurrent first visit for the same pair won the
                    // unique index; use its row.
                    Err(e) if AppError::is_unique_violation(&e) => {
                        conversations::Entity::find()
                            .filter(
                                conversations::Column::BusinessId.eq(business.business_id),
                            )
                            .filter(conversations::Column::UserId.eq(user_id))
                            .one(db)
                            .await?
                            .ok_or(AppError::Database(e))?
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        let messages =
            load_message_dtos(db, conversation.conversation_id, &business, user_id).await?;

        Ok(OpenChatResponse {
            conversation_id: conversation.conversation_id,
            business_name: business.name,
            business_slug: business.slug,
            messages,
        })
    }
}
