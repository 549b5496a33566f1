use crate::accounts::dtos::*;
use crate::{AppError, AppResult};
use tracing::{info, instrument, warn};
use validator::Validate;

#[cfg(test)]
#[path = "use_cases_test.rs"]
mod tests;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use kasbyar_core::entities::{business_ratings, businesses, users};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

// ============ Config ============

pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration: i64,
}

// ============ Register Use Case ============

pub struct RegisterUseCase;

impl RegisterUseCase {
    #[instrument(skip(db, config, req), fields(username = %req.username))]
    pub async fn execute(
        db: &DatabaseConnection,
        config: &AuthConfig,
        req: RegisterRequest,
    ) -> AppResult<AuthResponse> {
        req.validate()?;
        check_phone(&req.phone_number)?;

        let taken = users::Entity::find()
            .filter(users::Column::Username.eq(&req.username))
            .count(db)
            .await?;
        if taken > 0 {
            warn!("Username already taken: {}", req.username);
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)?
            .to_string();

        let now = Utc::now();
        let new_user = users::ActiveModel {
            user_id: Set(Uuid::new_v4()),
            username: Set(req.username.clone()),
            password_hash: Set(password_hash),
            phone_number: Set(req.phone_number.clone()),
            city: Set(req.city.clone()),
            profile_picture: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        let user = new_user.insert(db).await?;

        let access_token = issue_token(config, user.user_id)?;

        info!("Registered user {}", user.user_id);
        Ok(AuthResponse {
            access_token,
            user_id: user.user_id,
            username: user.username,
        })
    }
}

// ============ Login Use Case ============

pub struct LoginUseCase;

impl LoginUseCase {
    #[instrument(skip(db, config, req), fields(username = %req.username))]
    pub async fn execute(
        db: &DatabaseConnection,
        config: &AuthConfig,
        req: LoginRequest,
    ) -> AppResult<AuthResponse> {
        req.validate()?;

        let user = users::Entity::find()
            .filter(users::Column::Username.eq(&req.username))
            .one(db)
            .await?
            .ok_or_else(|| {
                AppError::Authentication("Invalid username or password".to_string())
            })?;

        let parsed_hash = PasswordHash::new(&user.password_hash)?;
        if Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            warn!("Failed login attempt for {}", req.username);
            return Err(AppError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        let access_token = issue_token(config, user.user_id)?;

        Ok(AuthResponse {
            access_token,
            user_id: user.user_id,
            username: user.username,
        })
    }
}

// ============ Profile Use Cases ============

pub struct GetProfileUseCase;

impl GetProfileUseCase {
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<ProfileResponse> {
        let user = users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let owned = businesses::Entity::find()
            .filter(businesses::Column::OwnerId.eq(user_id))
            .all(db)
            .await?;
        let business_count = owned.len() as u64;

        // Profile-page aggregate: mean of approved ratings across owned
        // listings, recomputed on every request.
        let owned_ids: Vec<Uuid> = owned.iter().map(|b| b.business_id).collect();
        let avg_rating = if owned_ids.is_empty() {
            0.0
        } else {
            let ratings = business_ratings::Entity::find()
                .filter(business_ratings::Column::BusinessId.is_in(owned_ids))
                .filter(business_ratings::Column::IsApproved.eq(true))
                .all(db)
                .await?;
            if ratings.is_empty() {
                0.0
            } else {
                let sum: f64 = ratings.iter().map(|r| r.rating).sum();
                (sum / ratings.len() as f64 * 10.0).round() / 10.0
            }
        };

        Ok(ProfileResponse {
            user_id: user.user_id,
            username: user.username,
            phone_number: user.phone_number,
            city: user.city,
            profile_picture: user.profile_picture,
            business_count,
            avg_rating,
            created_at: user.created_at.with_timezone(&Utc),
        })
    }
}

pub struct UpdateProfileUseCase;

impl UpdateProfileUseCase {
    #[instrument(skip(db, req))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> AppResult<ProfileResponse> {
        req.validate()?;
        check_phone(&req.phone_number)?;

        let user = users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut active: users::ActiveModel = user.into();
        if req.phone_number.is_some() {
            active.phone_number = Set(req.phone_number.clone());
        }
        if req.city.is_some() {
            active.city = Set(req.city.clone());
        }
        if req.profile_picture.is_some() {
            active.profile_picture = Set(req.profile_picture.clone());
        }
        active.updated_at = Set(Utc::now().into());
        active.update(db).await?;

        GetProfileUseCase::execute(db, user_id).await
    }
}

fn check_phone(phone_number: &Option<String>) -> AppResult<()> {
    if let Some(phone) = phone_number {
        crate::accounts::validate_phone_number(phone).map_err(|_| {
            AppError::Validation("phone_number: not a valid Iranian mobile number".to_string())
        })?;
    }
    Ok(())
}

// ============ Token issuing ============

fn issue_token(config: &AuthConfig, user_id: Uuid) -> AppResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(config.jwt_expiration)).timestamp(),
    };
    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    Ok(encode(&Header::default(), &claims, &encoding_key)?)
}
