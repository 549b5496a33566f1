use actix_web::{get, post, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use application::chat::dtos::SendMessageRequest;
use application::chat::list_conversations::ListConversationsUseCase;
use application::chat::list_messages::ListMessagesUseCase;
use application::chat::open_conversation::OpenConversationUseCase;
use application::chat::send_message::SendMessageUseCase;

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpAppError;

#[get("/api/v1/businesses/{slug}/chat")]
pub async fn open_chat(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
    path: web::Path<String>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = auth.user_id()?;
    let slug = path.into_inner();
    let response = OpenConversationUseCase::execute(db.get_ref(), user_id, &slug).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/v1/chat")]
pub async fn inbox(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
) -> Result<impl Responder, HttpAppError> {
    let user_id = auth.user_id()?;
    let response = ListConversationsUseCase::execute(db.get_ref(), user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/v1/conversations/{conversation_id}/messages")]
pub async fn send_message(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
    path: web::Path<Uuid>,
    req: web::Json<SendMessageRequest>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = auth.user_id()?;
    let conversation_id = path.into_inner();
    let response =
        SendMessageUseCase::execute(db.get_ref(), user_id, conversation_id, req.into_inner())
            .await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/v1/messages/{conversation_id}")]
pub async fn get_messages(
    db: web::Data<DatabaseConnection>,
    auth: AuthUser,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = auth.user_id()?;
    let conversation_id = path.into_inner();
    let messages = ListMessagesUseCase::execute(db.get_ref(), user_id, conversation_id).await?;
    Ok(HttpResponse::Ok().json(messages))
}
