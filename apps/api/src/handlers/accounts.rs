use actix_web::{get, post, put, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;

use application::accounts::dtos::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use application::accounts::use_cases::{
    AuthConfig, GetProfileUseCase, LoginUseCase, RegisterUseCase, UpdateProfileUseCase,
};

use crate::config::Config;
use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpAppError;

fn auth_config(config: &Config) -> AuthConfig {
    AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        jwt_expiration: config.jwt_expiration,
    }
}

#[post("/api/v1/auth/register")]
pub async fn register(
    db: web::Data<DatabaseConnection>,
    config: web::Data<Config>,
    req: web::Json<RegisterRequest>,
) -> Result<impl Responder, HttpAppError> {
    let response =
        RegisterUseCase::execute(db.get_ref(), &auth_config(&config), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/api/v1/auth/login")]
pub async fn login(
    db: web::Data<DatabaseConnection>,
    config: web::Data<Config>,
    req: web::Json<LoginRequest>,
) -> Result<impl Responder, HttpAppError> {
    let response =
        LoginUseCase::execute(db.get_ref(), &auth_config(&config), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/v1/auth/profile")]
pub async fn get_profile(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
) -> Result<impl Responder, HttpAppError> {
    let user_id = auth.user_id()?;
    let response = GetProfileUseCase::execute(db.get_ref(), user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/api/v1/auth/profile")]
pub async fn update_profile(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
    req: web::Json<UpdateProfileRequest>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = auth.user_id()?;
    let response = UpdateProfileUseCase::execute(db.get_ref(), user_id, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
