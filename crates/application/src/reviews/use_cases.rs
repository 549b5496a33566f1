use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use kasbyar_core::entities::{business_ratings, businesses};

use super::dtos::{SubmitReviewRequest, SubmitReviewResponse};
use super::stats::clamp_rating;
use crate::{AppError, AppResult};

#[cfg(test)]
#[path = "use_cases_test.rs"]
mod tests;

// ============ Add Review Use Case ============

pub struct AddReviewUseCase;

impl AddReviewUseCase {
    #[instrument(skip(db, req), fields(slug = %slug))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: Uuid,
        slug: &str,
        req: SubmitReviewRequest,
    ) -> AppResult<SubmitReviewResponse> {
        req.validate()?;

        let business = find_approved_business(db, slug).await?;

        let existing = business_ratings::Entity::find()
            .filter(business_ratings::Column::BusinessId.eq(business.business_id))
            .filter(business_ratings::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        if existing.is_some() {
            warn!("Duplicate review attempt for business {}", business.business_id);
            return Err(AppError::Conflict(
                "You have already reviewed this business".to_string(),
            ));
        }

        // The unique index on (business_id, user_id) still rejects the
        // second of two concurrent writers; that surfaces as Conflict too.
        let row = business_ratings::ActiveModel {
            business_id: Set(business.business_id),
            user_id: Set(user_id),
            rating: Set(clamp_rating(req.rating)),
            comment: Set(req.comment.clone()),
            is_approved: Set(false),
            created_at: Set(Utc::now().into()),
            edited_at: Set(None),
            ..Default::default()
        };
        let inserted = row.insert(db).await?;

        info!("Review added for business {}", business.business_id);
        Ok(SubmitReviewResponse {
            rating: inserted.rating,
            comment: inserted.comment,
            is_approved: inserted.is_approved,
        })
    }
}

// ============ Edit Review Use Case ============

pub struct EditReviewUseCase;

impl EditReviewUseCase {
    #[instrument(skip(db, req), fields(slug = %slug))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: Uuid,
        slug: &str,
        req: SubmitReviewRequest,
    ) -> AppResult<SubmitReviewResponse> {
        req.validate()?;

        let business = find_approved_business(db, slug).await?;

        let existing = business_ratings::Entity::find()
            .filter(business_ratings::Column::BusinessId.eq(business.business_id))
            .filter(business_ratings::Column::UserId.eq(user_id))
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        // An edit always re-enters moderation.
        let mut active: business_ratings::ActiveModel = existing.into();
        active.rating = Set(clamp_rating(req.rating));
        active.comment = Set(req.comment.clone());
        active.is_approved = Set(false);
        active.edited_at = Set(Some(Utc::now().into()));
        let updated = active.update(db).await?;

        Ok(SubmitReviewResponse {
            rating: updated.rating,
            comment: updated.comment,
            is_approved: updated.is_approved,
        })
    }
}

// ============ Delete Review Use Case ============

pub struct DeleteReviewUseCase;

impl DeleteReviewUseCase {
    #[instrument(skip(db), fields(slug = %slug))]
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid, slug: &str) -> AppResult<()> {
        let business = find_approved_business(db, slug).await?;

        let existing = business_ratings::Entity::find()
            .filter(business_ratings::Column::BusinessId.eq(business.business_id))
            .filter(business_ratings::Column::UserId.eq(user_id))
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        existing.delete(db).await?;
        info!("Review deleted for business {}", business.business_id);
        Ok(())
    }
}

async fn find_approved_business(
    db: &DatabaseConnection,
    slug: &str,
) -> AppResult<businesses::Model> {
    businesses::Entity::find()
        .filter(businesses::Column::Slug.eq(slug))
        .filter(businesses::Column::IsApproved.eq(true))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Business not found".to_string()))
}
