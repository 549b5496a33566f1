#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use kasbyar_core::entities::{business_ratings, businesses};

    use crate::reviews::dtos::SubmitReviewRequest;
    use crate::reviews::use_cases::{AddReviewUseCase, DeleteReviewUseCase, EditReviewUseCase};
    use crate::AppError;

    fn approved_business(owner_id: Uuid) -> businesses::Model {
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

    fn rating_row(business_id: Uuid, user_id: Uuid, rating: f64) -> business_ratings::Model {
        business_ratings::Model {
            rating_id: 1,
            business_id,
            user_id,
            rating,
            comment: None,
            is_approved: false,
            created_at: Utc::now().into(),
            edited_at: None,
        }
    }

    #[tokio::test]
    async fn test_add_review_rejects_duplicate() {
        let user_id = Uuid::new_v4();
        let business = approved_business(Uuid::new_v4());
        let existing = rating_row(business.business_id, user_id, 4.0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![business]])
            .append_query_results([vec![existing]])
            .into_connection();

        let req = SubmitReviewRequest {
            rating: 5.0,
            comment: None,
        };
        let err = AddReviewUseCase::execute(&db, user_id, "کافه-میزبان", req)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_add_review_unknown_business_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<businesses::Model>::new()])
            .into_connection();

        let req = SubmitReviewRequest {
            rating: 4.0,
            comment: None,
        };
        let err = AddReviewUseCase::execute(&db, Uuid::new_v4(), "missing", req)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_review_stores_pending_moderation() {
        let user_id = Uuid::new_v4();
        let business = approved_business(Uuid::new_v4());
        let inserted = rating_row(business.business_id, user_id, 5.0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![business]])
            .append_query_results([Vec::<business_ratings::Model>::new()])
            .append_query_results([vec![inserted]])
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let req = SubmitReviewRequest {
            rating: 5.0,
            comment: Some("عالی بود".to_string()),
        };
        let response = AddReviewUseCase::execute(&db, user_id, "کافه-میزبان", req)
            .await
            .unwrap();
        assert!(!response.is_approved);
    }

    #[tokio::test]
    async fn test_edit_review_requires_existing_row() {
        let user_id = Uuid::new_v4();
        let business = approved_business(Uuid::new_v4());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![business]])
            .append_query_results([Vec::<business_ratings::Model>::new()])
            .into_connection();

        let req = SubmitReviewRequest {
            rating: 3.0,
            comment: None,
        };
        let err = EditReviewUseCase::execute(&db, user_id, "کافه-میزبان", req)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_review_requires_existing_row() {
        let user_id = Uuid::new_v4();
        let business = approved_business(Uuid::new_v4());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![business]])
            .append_query_results([Vec::<business_ratings::Model>::new()])
            .into_connection();

        let err = DeleteReviewUseCase::execute(&db, user_id, "کافه-میزبان")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
