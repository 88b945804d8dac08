// src/models/attendance.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Registro de presença: log puro, uma linha por marcação, sem update nem
// delete. A janela de 24h entre marcações é imposta pelo serviço.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,

    #[schema(example = "a@x.com")]
    pub email: String,

    pub recorded_at: DateTime<Utc>,
}
