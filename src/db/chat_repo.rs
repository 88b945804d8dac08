// src/db/chat_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::chat::Message};

// Repositório do chat. Append puro: não há update nem delete de mensagem,
// então nenhuma operação aqui precisa de transação.
#[derive(Clone)]
pub struct ChatRepository {
    pool: PgPool,
}

impl ChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        company_id: Uuid,
        author: &str,
        body: &str,
    ) -> Result<Message, AppError> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (company_id, author, body)
             VALUES ($1, $2, $3)
             RETURNING id, company_id, author, body, created_at",
        )
        .bind(company_id)
        .bind(author)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;
        Ok(message)
    }

    /// O snapshot completo do canal da empresa, em ordem crescente de
    /// criação. O leitor substitui a lista visível por este snapshot, nunca
    /// aplica diffs incrementais.
    pub async fn list_for_company(&self, company_id: Uuid) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, company_id, author, body, created_at
             FROM messages
             WHERE company_id = $1
             ORDER BY created_at ASC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }
}
