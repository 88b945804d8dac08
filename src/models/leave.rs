// src/models/leave.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "leave_status", rename_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum LeaveStatus {
    Pending,
    Granted,
    Rejected,
}

impl LeaveStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

// Pedido de licença. Mesma regra de janela de 24h da presença.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "a@x.com")]
    pub email: String,

    pub company_id: Uuid,
    pub requested_at: DateTime<Utc>,

    #[schema(example = "Consulta médica.")]
    pub reason: String,

    pub status: LeaveStatus,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequestPayload {
    #[validate(length(min = 1, max = 500, message = "O motivo é obrigatório (máximo 500 caracteres)."))]
    #[schema(example = "Consulta médica.")]
    pub reason: String,
}
