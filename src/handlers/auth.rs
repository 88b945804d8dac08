// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::{
        access::{self, Action, Screen},
        error::AppError,
    },
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{
        AuthResponse, ForgotPasswordPayload, LoginUserPayload, RegisterUserPayload,
        ResetPasswordPayload, ResetTokenResponse, Role, User,
    },
};

// Handler de registro
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterUserPayload,
    responses(
        (status = 201, description = "Usuário criado, token de sessão emitido", body = AuthResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "E-mail já em uso")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let token = app_state
        .auth_service
        .register_user(&payload.email, &payload.password, &payload.contact_number)
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse { token })))
}

// Handler de login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "Token de sessão emitido", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginUserPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let token = app_state
        .auth_service
        .login_user(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// Início do fluxo "esqueci a senha". Num deploy real o token iria por SMS;
// aqui ele volta na resposta, fazendo o papel do código de verificação.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = "Auth",
    request_body = ForgotPasswordPayload,
    responses(
        (status = 200, description = "Token de redefinição emitido", body = ResetTokenResponse),
        (status = 401, description = "E-mail ou telefone não conferem")
    )
)]
pub async fn forgot_password(
    State(app_state): State<AppState>,
    Json(payload): Json<ForgotPasswordPayload>,
) -> Result<Json<ResetTokenResponse>, AppError> {
    payload.validate()?;

    let reset_token = app_state
        .auth_service
        .forgot_password(&payload.email, &payload.contact_number)
        .await?;

    Ok(Json(ResetTokenResponse { reset_token }))
}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "Auth",
    request_body = ResetPasswordPayload,
    responses(
        (status = 204, description = "Senha redefinida"),
        (status = 401, description = "Token de redefinição inválido ou expirado")
    )
)]
pub async fn reset_password(
    State(app_state): State<AppState>,
    Json(payload): Json<ResetPasswordPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .auth_service
        .reset_password(&payload.token, &payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// Handler da rota protegida /me: o contexto de sessão completo
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Perfil do usuário da sessão", body = User)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}

// O que o cliente pode mostrar para este papel: a tabela de navegação
// inteira numa resposta só, em vez de `if role == ...` espalhado nas telas.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub role: Role,
    pub actions: Vec<Action>,
    pub screens: Vec<Screen>,
}

#[utoipa::path(
    get,
    path = "/api/users/me/navigation",
    tag = "Users",
    responses(
        (status = 200, description = "Ações e telas permitidas para o papel da sessão", body = NavigationResponse)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_my_navigation(AuthenticatedUser(user): AuthenticatedUser) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        role: user.role,
        actions: access::allowed_actions(user.role).to_vec(),
        screens: access::allowed_screens(user.role).to_vec(),
    })
}
