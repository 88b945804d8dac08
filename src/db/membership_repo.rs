// src/db/membership_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::membership::{JoinRequest, JoinRequestStatus},
};

const REQUEST_COLUMNS: &str =
    "id, user_id, user_email, company_id, company_name, description, status, created_at";

// Repositório dos pedidos de ingresso em empresas
#[derive(Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_request<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        user_email: &str,
        company_id: Uuid,
        company_name: &str,
        description: &str,
    ) -> Result<JoinRequest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let request = sqlx::query_as::<_, JoinRequest>(&format!(
            "INSERT INTO join_requests (user_id, user_email, company_id, company_name, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {REQUEST_COLUMNS}"
        ))
        .bind(user_id)
        .bind(user_email)
        .bind(company_id)
        .bind(company_name)
        .bind(description)
        .fetch_one(executor)
        .await?;
        Ok(request)
    }

    // A lista que o empregador vê na tela de candidatos
    pub async fn list_for_company(&self, company_id: Uuid) -> Result<Vec<JoinRequest>, AppError> {
        let requests = sqlx::query_as::<_, JoinRequest>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM join_requests
             WHERE company_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    /// Busca o pedido travando a linha. O aceite relê o status dentro da
    /// transação para que dois empregadores não resolvam o mesmo pedido.
    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<JoinRequest>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let maybe_request = sqlx::query_as::<_, JoinRequest>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM join_requests WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(maybe_request)
    }

    pub async fn set_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: JoinRequestStatus,
    ) -> Result<JoinRequest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let request = sqlx::query_as::<_, JoinRequest>(&format!(
            "UPDATE join_requests SET status = $2 WHERE id = $1
             RETURNING {REQUEST_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_one(executor)
        .await?;
        Ok(request)
    }
}
