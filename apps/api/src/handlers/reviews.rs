use actix_web::{delete, post, put, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;

use application::reviews::dtos::SubmitReviewRequest;
use application::reviews::use_cases::{AddReviewUseCase, DeleteReviewUseCase, EditReviewUseCase};

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpAppError;

#[post("/api/v1/businesses/{slug}/review")]
pub async fn add_review(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
    path: web::Path<String>,
    req: web::Json<SubmitReviewRequest>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = auth.user_id()?;
    let slug = path.into_inner();
    let response =
        AddReviewUseCase::execute(db.get_ref(), user_id, &slug, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[put("/api/v1/businesses/{slug}/review")]
pub async fn edit_review(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
    path: web::Path<String>,
    req: web::Json<SubmitReviewRequest>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = auth.user_id()?;
    let slug = path.into_inner();
    let response =
        EditReviewUseCase::execute(db.get_ref(), user_id, &slug, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/api/v1/businesses/{slug}/review")]
pub async fn delete_review(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
    path: web::Path<String>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = auth.user_id()?;
    let slug = path.into_inner();
    DeleteReviewUseCase::execute(db.get_ref(), user_id, &slug).await?;
    Ok(HttpResponse::NoContent().finish())
}
