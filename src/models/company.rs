// src/models/company.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// A empresa (o "tenant" deste sistema)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,

    #[schema(example = "Acme")]
    pub name: String,

    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyPayload {
    #[validate(length(min = 1, message = "O nome da empresa é obrigatório."))]
    #[schema(example = "Acme")]
    pub name: String,
}

// O que a tela de consulta ("chatbot") mostra sobre uma empresa:
// data de criação, quantidade de membros e o e-mail do empregador.
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub id: Uuid,

    #[schema(example = "Acme")]
    pub name: String,

    pub created_at: DateTime<Utc>,

    #[schema(example = 12)]
    pub member_count: i64,

    pub employer_email: Option<String>,
}
