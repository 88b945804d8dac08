// src/handlers/membership.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        access::{CanResolveJoinRequests, CanSearchCompanies, RequireAction},
        auth::AuthenticatedUser,
    },
    models::membership::{CreateJoinRequestPayload, JoinRequest},
};

// POST /api/join-requests — candidatar-se a uma empresa
#[utoipa::path(
    post,
    path = "/api/join-requests",
    tag = "JoinRequests",
    request_body = CreateJoinRequestPayload,
    responses(
        (status = 201, description = "Pedido de ingresso registrado como pendente", body = JoinRequest),
        (status = 404, description = "Empresa não encontrada"),
        (status = 409, description = "Usuário já associado a uma empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_join_request(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanSearchCompanies>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateJoinRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let request = app_state
        .membership_service
        .apply(&user, payload.company_id, &payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

// GET /api/join-requests — a fila de candidatos do empregador
#[utoipa::path(
    get,
    path = "/api/join-requests",
    tag = "JoinRequests",
    responses(
        (status = 200, description = "Pedidos de ingresso da empresa da sessão", body = Vec<JoinRequest>),
        (status = 403, description = "Papel da sessão não resolve candidaturas"),
        (status = 409, description = "Sessão sem empresa associada")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_join_requests(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanResolveJoinRequests>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<JoinRequest>>, AppError> {
    let requests = app_state.membership_service.list_for_employer(&user).await?;
    Ok(Json(requests))
}

// POST /api/join-requests/{id}/accept
#[utoipa::path(
    post,
    path = "/api/join-requests/{id}/accept",
    tag = "JoinRequests",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido aceito; candidato agora é employee", body = JoinRequest),
        (status = 404, description = "Pedido não encontrado (ou de outra empresa)"),
        (status = 409, description = "Pedido já resolvido, ou candidato já tem empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn accept_join_request(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanResolveJoinRequests>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<JoinRequest>, AppError> {
    let accepted = app_state.membership_service.accept(&user, id).await?;
    Ok(Json(accepted))
}

// POST /api/join-requests/{id}/reject
#[utoipa::path(
    post,
    path = "/api/join-requests/{id}/reject",
    tag = "JoinRequests",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido rejeitado; candidato não é tocado", body = JoinRequest),
        (status = 404, description = "Pedido não encontrado (ou de outra empresa)"),
        (status = 409, description = "Pedido já resolvido")
    ),
    security(("api_jwt" = []))
)]
pub async fn reject_join_request(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanResolveJoinRequests>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<JoinRequest>, AppError> {
    let rejected = app_state.membership_service.reject(&user, id).await?;
    Ok(Json(rejected))
}
