// src/models/chat.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Mensagem do chat interno da empresa. Imutável depois de gravada:
// não há edição, exclusão nem confirmação de entrega.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub company_id: Uuid,

    // Identidade de exibição do autor (o e-mail da sessão)
    #[schema(example = "a@x.com")]
    pub author: String,

    #[schema(example = "Bom dia, equipe!")]
    pub body: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessagePayload {
    #[validate(length(min = 1, max = 2000, message = "A mensagem não pode ser vazia (máximo 2000 caracteres)."))]
    #[schema(example = "Bom dia, equipe!")]
    pub body: String,
}
