// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Toda falha é terminal para a ação que a disparou: o erro é reportado
// e o usuário tenta de novo; não existe fila de retry.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Empresa não encontrada")]
    CompanyNotFound,

    #[error("Já existe uma empresa com o nome '{0}'")]
    CompanyNameAlreadyExists(String),

    #[error("O usuário já está associado a uma empresa")]
    AlreadyInCompany,

    #[error("O usuário não está associado a nenhuma empresa")]
    NotInCompany,

    #[error("Pedido de ingresso não encontrado")]
    JoinRequestNotFound,

    #[error("Pedido de licença não encontrado")]
    LeaveRequestNotFound,

    // Pedido já aceito ou rejeitado: o estado é terminal
    #[error("O pedido já foi resolvido")]
    RequestAlreadyResolved,

    // A janela de 24h entre submissões ainda não fechou
    #[error("Aguarde {hours_remaining}h para submeter novamente")]
    CooldownActive { hours_remaining: i64 },

    // O papel da sessão não inclui a ação pedida
    #[error("Ação '{0}' não permitida para este papel")]
    ActionNotAllowed(&'static str),

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "Este e-mail já está em uso.".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::UserNotFound => {
                (StatusCode::NOT_FOUND, "Usuário não encontrado.".to_string())
            }
            AppError::CompanyNotFound => {
                (StatusCode::NOT_FOUND, "Empresa não encontrada.".to_string())
            }
            AppError::CompanyNameAlreadyExists(name) => (
                StatusCode::CONFLICT,
                format!("Já existe uma empresa chamada '{}'. Escolha outro nome.", name),
            ),
            AppError::AlreadyInCompany => (
                StatusCode::CONFLICT,
                "O usuário já está associado a uma empresa.".to_string(),
            ),
            AppError::NotInCompany => (
                StatusCode::CONFLICT,
                "Nenhuma empresa associada a este usuário.".to_string(),
            ),
            AppError::JoinRequestNotFound => {
                (StatusCode::NOT_FOUND, "Pedido de ingresso não encontrado.".to_string())
            }
            AppError::LeaveRequestNotFound => {
                (StatusCode::NOT_FOUND, "Pedido de licença não encontrado.".to_string())
            }
            AppError::RequestAlreadyResolved => (
                StatusCode::CONFLICT,
                "Este pedido já foi aceito ou rejeitado.".to_string(),
            ),
            AppError::CooldownActive { hours_remaining } => (
                StatusCode::TOO_MANY_REQUESTS,
                format!(
                    "Você só pode submeter uma vez a cada 24 horas. Tente novamente em {}h.",
                    hours_remaining
                ),
            ),
            AppError::ActionNotAllowed(action) => (
                StatusCode::FORBIDDEN,
                format!("Seu papel não permite a ação '{}'.", action),
            ),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_maps_to_too_many_requests() {
        let resp = AppError::CooldownActive { hours_remaining: 23 }.into_response();
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn action_not_allowed_maps_to_forbidden() {
        let resp = AppError::ActionNotAllowed("deleteCompany").into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn conflicts_map_to_409() {
        for err in [
            AppError::EmailAlreadyExists,
            AppError::AlreadyInCompany,
            AppError::RequestAlreadyResolved,
            AppError::CompanyNameAlreadyExists("Acme".to_string()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn invalid_token_maps_to_unauthorized() {
        let resp = AppError::InvalidToken.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
