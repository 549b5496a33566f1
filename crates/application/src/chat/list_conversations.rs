use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use kasbyar_core::entities::{businesses, conversations, users};

use super::dtos::{ConversationDto, InboxResponse};
use crate::AppResult;

pub struct ListConversationsUseCase;

impl ListConversationsUseCase {
    /// Inbox view: a caller who owns approved businesses sees every thread
    /// across them; everyone else sees the threads they initiated.
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<InboxResponse> {
        let owned = businesses::Entity::find()
            .filter(businesses::Column::OwnerId.eq(user_id))
            .filter(businesses::Column::IsApproved.eq(true))
            .all(db)
            .await?;
        let is_owner = !owned.is_empty();

        let rows = if is_owner {
            let owned_ids: Vec<Uuid> = owned.iter().map(|b| b.business_id).collect();
            conversations::Entity::find()
                .filter(conversations::Column::BusinessId.is_in(owned_ids))
                .order_by_desc(conversations::Column::UpdatedAt)
                .all(db)
                .await?
        } else {
            conversations::Entity::find()
                .filter(conversations::Column::UserId.eq(user_id))
                .order_by_desc(conversations::Column::UpdatedAt)
                .all(db)
                .await?
        };

        let business_names: HashMap<Uuid, (String, String)> = if is_owner {
            owned
                .into_iter()
                .map(|b| (b.business_id, (b.name, b.slug)))
                .collect()
        } else {
            let ids: Vec<Uuid> = rows.iter().map(|c| c.business_id).collect();
            businesses::Entity::find()
                .filter(businesses::Column::BusinessId.is_in(ids))
                .all(db)
                .await?
                .into_iter()
                .map(|b| (b.business_id, (b.name, b.slug)))
                .collect()
        };

        let user_ids: Vec<Uuid> = rows.iter().map(|c| c.user_id).collect();
        let usernames: HashMap<Uuid, String> = users::Entity::find()
            .filter(users::Column::UserId.is_in(user_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.user_id, u.username))
            .collect();

        let conversations = rows
            .into_iter()
            .filter_map(|c| {
                let (business_name, business_slug) = business_names.get(&c.business_id).cloned()?;
                Some(ConversationDto {
                    conversation_id: c.conversation_id,
                    business_name,
                    business_slug,
                    username: usernames.get(&c.user_id).cloned().unwrap_or_default(),
                    created_at: c.created_at.with_timezone(&Utc),
                    updated_at: c.updated_at.with_timezone(&Utc),
                })
            })
            .collect();

        Ok(InboxResponse {
            is_owner,
            conversations,
        })
    }
}
