// src/models/membership.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "join_request_status", rename_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum JoinRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl JoinRequestStatus {
    // Um pedido resolvido é terminal: nunca volta a pending.
    pub fn is_terminal(self) -> bool {
        !matches!(self, JoinRequestStatus::Pending)
    }
}

/// Pré-condição do aceite: o pedido precisa estar pendente e o candidato
/// ainda sem empresa. O serviço a roda sobre as linhas travadas dentro da
/// transação; falhar aqui deixa pedido e candidato intocados.
pub fn acceptance_guard(
    status: JoinRequestStatus,
    candidate_company: Option<Uuid>,
) -> Result<(), AppError> {
    if status.is_terminal() {
        return Err(AppError::RequestAlreadyResolved);
    }
    if candidate_company.is_some() {
        return Err(AppError::AlreadyInCompany);
    }
    Ok(())
}

// Pedido de um usuário para entrar numa empresa
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "a@x.com")]
    pub user_email: String,

    pub company_id: Uuid,

    #[schema(example = "Acme")]
    pub company_name: String,

    #[schema(example = "Tenho 3 anos de experiência na área.")]
    pub description: String,

    pub status: JoinRequestStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJoinRequestPayload {
    pub company_id: Uuid,

    // Apresentação livre do candidato, pode ficar vazia
    #[validate(length(max = 500, message = "A descrição deve ter no máximo 500 caracteres."))]
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_statuses_are_terminal() {
        assert!(!JoinRequestStatus::Pending.is_terminal());
        assert!(JoinRequestStatus::Accepted.is_terminal());
        assert!(JoinRequestStatus::Rejected.is_terminal());
    }

    #[test]
    fn accepting_a_resolved_request_is_rejected() {
        for status in [JoinRequestStatus::Accepted, JoinRequestStatus::Rejected] {
            assert!(matches!(
                acceptance_guard(status, None),
                Err(AppError::RequestAlreadyResolved)
            ));
        }
    }

    #[test]
    fn accepting_a_candidate_who_joined_elsewhere_is_rejected() {
        // O candidato já tem empresa: o aceite não pode tocá-lo
        let result = acceptance_guard(JoinRequestStatus::Pending, Some(Uuid::new_v4()));
        assert!(matches!(result, Err(AppError::AlreadyInCompany)));
    }

    #[test]
    fn pending_request_with_free_candidate_is_acceptable() {
        assert!(acceptance_guard(JoinRequestStatus::Pending, None).is_ok());
    }
}
