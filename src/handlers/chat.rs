// src/handlers/chat.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        access::{CanCompanyChat, RequireAction},
        auth::AuthenticatedUser,
    },
    models::chat::{Message, SendMessagePayload},
};

// POST /api/messages — enviar mensagem no canal da empresa
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "Chat",
    request_body = SendMessagePayload,
    responses(
        (status = 201, description = "Mensagem gravada", body = Message),
        (status = 403, description = "Papel da sessão não participa do chat"),
        (status = 409, description = "Sessão sem empresa associada")
    ),
    security(("api_jwt" = []))
)]
pub async fn send_message(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanCompanyChat>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<SendMessagePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let message = app_state.chat_service.send(&user, &payload.body).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

// GET /api/messages — o snapshot do canal, em ordem crescente de criação.
// O cliente substitui a lista visível pelo snapshot inteiro a cada leitura.
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "Chat",
    responses(
        (status = 200, description = "Mensagens da empresa da sessão, mais antigas primeiro", body = Vec<Message>),
        (status = 403, description = "Papel da sessão não participa do chat"),
        (status = 409, description = "Sessão sem empresa associada")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_messages(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanCompanyChat>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = app_state.chat_service.messages(&user).await?;
    Ok(Json(messages))
}
