// src/handlers/leave.rs

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
        access::{CanRequestLeave, CanResolveLeaveRequests, CanViewOwnLeave, RequireAction},
        auth::AuthenticatedUser,
    },
    models::leave::{CreateLeaveRequestPayload, LeaveRequest},
};

// POST /api/leave-requests — pedir licença
#[utoipa::path(
    post,
    path = "/api/leave-requests",
    tag = "Leave",
    request_body = CreateLeaveRequestPayload,
    responses(
        (status = 201, description = "Pedido de licença registrado como pendente", body = LeaveRequest),
        (status = 403, description = "Papel da sessão não pede licença"),
        (status = 409, description = "Sessão sem empresa associada"),
        (status = 429, description = "Janela de 24h ainda aberta")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_leave_request(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanRequestLeave>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateLeaveRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let request = app_state
        .leave_service
        .request_leave(&user, &payload.reason)
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

// GET /api/leave-requests/mine — o status dos próprios pedidos
#[utoipa::path(
    get,
    path = "/api/leave-requests/mine",
    tag = "Leave",
    responses(
        (status = 200, description = "Pedidos do usuário da sessão, mais recentes primeiro", body = Vec<LeaveRequest>)
    ),
    security(("api_jwt" = []))
)]
pub async fn my_leave_requests(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanViewOwnLeave>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    let requests = app_state.leave_service.my_requests(&user).await?;
    Ok(Json(requests))
}

// GET /api/leave-requests — a fila do empregador
#[utoipa::path(
    get,
    path = "/api/leave-requests",
    tag = "Leave",
    responses(
        (status = 200, description = "Pedidos de licença da empresa da sessão", body = Vec<LeaveRequest>),
        (status = 403, description = "Papel da sessão não resolve licenças"),
        (status = 409, description = "Sessão sem empresa associada")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_leave_requests(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanResolveLeaveRequests>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    let requests = app_state.leave_service.list_for_employer(&user).await?;
    Ok(Json(requests))
}

// POST /api/leave-requests/{id}/grant
#[utoipa::path(
    post,
    path = "/api/leave-requests/{id}/grant",
    tag = "Leave",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Licença concedida", body = LeaveRequest),
        (status = 404, description = "Pedido não encontrado (ou de outra empresa)"),
        (status = 409, description = "Pedido já resolvido")
    ),
    security(("api_jwt" = []))
)]
pub async fn grant_leave(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanResolveLeaveRequests>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LeaveRequest>, AppError> {
    let granted = app_state.leave_service.grant(&user, id).await?;
    Ok(Json(granted))
}

// POST /api/leave-requests/{id}/reject
#[utoipa::path(
    post,
    path = "/api/leave-requests/{id}/reject",
    tag = "Leave",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Licença rejeitada", body = LeaveRequest),
        (status = 404, description = "Pedido não encontrado (ou de outra empresa)"),
        (status = 409, description = "Pedido já resolvido")
    ),
    security(("api_jwt" = []))
)]
pub async fn reject_leave(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanResolveLeaveRequests>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LeaveRequest>, AppError> {
    let rejected = app_state.leave_service.reject(&user, id).await?;
    Ok(Json(rejected))
}
