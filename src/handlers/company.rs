// src/handlers/company.rs

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
        access::{
            CanChatbotLookup, CanCreateCompany, CanDeleteCompany, CanLeaveCompany,
            CanSearchCompanies, RequireAction,
        },
        auth::AuthenticatedUser,
    },
    models::{
        auth::User,
        company::{Company, CompanySummary, CreateCompanyPayload},
    },
};

// POST /api/companies
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "Companies",
    request_body = CreateCompanyPayload,
    responses(
        (status = 201, description = "Empresa criada; criador promovido a employer", body = Company),
        (status = 403, description = "Papel da sessão não pode criar empresa"),
        (status = 409, description = "Nome já em uso, ou usuário já tem empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_company(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanCreateCompany>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateCompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let company = app_state
        .company_service
        .create_company_with_owner(&payload.name, &user)
        .await?;

    Ok((StatusCode::CREATED, Json(company)))
}

// GET /api/companies — a lista da tela de busca
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "Companies",
    responses(
        (status = 200, description = "Todas as empresas cadastradas", body = Vec<Company>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_companies(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanSearchCompanies>,
) -> Result<Json<Vec<Company>>, AppError> {
    let companies = app_state.company_service.list_companies().await?;
    Ok(Json(companies))
}

// GET /api/companies/{id}/summary — a consulta do chatbot
#[utoipa::path(
    get,
    path = "/api/companies/{id}/summary",
    tag = "Companies",
    params(("id" = Uuid, Path, description = "ID da empresa")),
    responses(
        (status = 200, description = "Resumo da empresa (membros, criação, empregador)", body = CompanySummary),
        (status = 404, description = "Empresa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn company_summary(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanChatbotLookup>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanySummary>, AppError> {
    let summary = app_state.company_service.company_summary(id).await?;
    Ok(Json(summary))
}

// DELETE /api/companies — o empregador exclui a própria empresa
#[utoipa::path(
    delete,
    path = "/api/companies",
    tag = "Companies",
    responses(
        (status = 204, description = "Empresa excluída; todos os membros voltaram a new_user"),
        (status = 403, description = "Papel da sessão não pode excluir empresa"),
        (status = 409, description = "Sessão sem empresa associada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_company(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanDeleteCompany>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    app_state.company_service.delete_company(&user).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/companies/leave — o funcionário sai da empresa
#[utoipa::path(
    post,
    path = "/api/companies/leave",
    tag = "Companies",
    responses(
        (status = 200, description = "Usuário desassociado; perfil atualizado devolvido", body = User),
        (status = 403, description = "Papel da sessão não pode sair de empresa"),
        (status = 409, description = "Sessão sem empresa associada")
    ),
    security(("api_jwt" = []))
)]
pub async fn leave_company(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanLeaveCompany>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let updated = app_state.company_service.leave_company(&user).await?;
    Ok(Json(updated))
}
