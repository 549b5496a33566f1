use actix_web::{get, post, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;

use application::directory::dtos::{ListBusinessesFilter, RegisterBusinessRequest};
use application::directory::use_cases::{
    GetBusinessUseCase, ListBusinessesUseCase, ListCategoriesUseCase, MyBusinessesUseCase,
    RegisterBusinessUseCase,
};

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpAppError;

#[post("/api/v1/businesses")]
pub async fn register_business(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
    req: web::Json<RegisterBusinessRequest>,
) -> Result<impl Responder, HttpAppError> {
    let owner_id = auth.user_id()?;
    let response =
        RegisterBusinessUseCase::execute(db.get_ref(), owner_id, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/v1/businesses")]
pub async fn list_businesses(
    db: web::Data<DatabaseConnection>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<impl Responder, HttpAppError> {
    // Repeated `category[]`/`city[]` keys arrive as separate pairs.
    let mut filter = ListBusinessesFilter::default();
    for (key, value) in query.into_inner() {
        match key.as_str() {
            "category[]" | "category" => filter.categories.push(value),
            "city[]" | "city" => filter.cities.push(value),
            "search" => filter.search = Some(value),
            _ => {}
        }
    }

    let response = ListBusinessesUseCase::execute(db.get_ref(), filter).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/v1/businesses/mine")]
pub async fn my_businesses(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
) -> Result<impl Responder, HttpAppError> {
    let owner_id = auth.user_id()?;
    let response = MyBusinessesUseCase::execute(db.get_ref(), owner_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/v1/businesses/{slug}")]
pub async fn business_detail(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    viewer: Option<AuthUser>,
) -> Result<impl Responder, HttpAppError> {
    let slug = path.into_inner();
    let viewer_id = match viewer {
        Some(auth) => Some(auth.user_id()?),
        None => None,
    };
    let response = GetBusinessUseCase::execute(db.get_ref(), &slug, viewer_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/v1/categories")]
pub async fn list_categories(
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, HttpAppError> {
    let response = ListCategoriesUseCase::execute(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(response))
}
