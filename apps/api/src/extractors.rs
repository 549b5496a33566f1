use actix_web::Error;
use actix_web::{FromRequest, HttpMessage};
use application::accounts::dtos::Claims;
use application::AppError;
use futures::future::{ready, Ready};
use uuid::Uuid;

/// Request-scoped identity: populated by the auth middleware, handed to
/// handlers explicitly instead of living in ambient request state.
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::Authentication("Invalid subject claim".to_string()))
    }
}

impl FromRequest for AuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthUser(claims.clone()))),
            None => ready(Err(actix_web::error::ErrorUnauthorized("Unauthorized"))),
        }
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
