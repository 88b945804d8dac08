// src/db/leave_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::leave::{LeaveRequest, LeaveStatus},
};

const LEAVE_COLUMNS: &str = "id, user_id, email, company_id, requested_at, reason, status";

#[derive(Clone)]
pub struct LeaveRepository {
    pool: PgPool,
}

impl LeaveRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// O pedido mais recente do usuário, para a guarda de 24h.
    pub async fn latest_for_user<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Option<DateTime<Utc>>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let latest = sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT requested_at FROM leave_requests
             WHERE user_id = $1
             ORDER BY requested_at DESC
             LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(executor)
        .await?;
        Ok(latest)
    }

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        email: &str,
        company_id: Uuid,
        requested_at: DateTime<Utc>,
        reason: &str,
    ) -> Result<LeaveRequest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let request = sqlx::query_as::<_, LeaveRequest>(&format!(
            "INSERT INTO leave_requests (user_id, email, company_id, requested_at, reason)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {LEAVE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(email)
        .bind(company_id)
        .bind(requested_at)
        .bind(reason)
        .fetch_one(executor)
        .await?;
        Ok(request)
    }

    // O histórico próprio do funcionário, para a tela de acompanhamento
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<LeaveRequest>, AppError> {
        let requests = sqlx::query_as::<_, LeaveRequest>(&format!(
            "SELECT {LEAVE_COLUMNS} FROM leave_requests
             WHERE user_id = $1
             ORDER BY requested_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    // A visão do empregador: todos os pedidos da empresa
    pub async fn list_for_company(&self, company_id: Uuid) -> Result<Vec<LeaveRequest>, AppError> {
        let requests = sqlx::query_as::<_, LeaveRequest>(&format!(
            "SELECT {LEAVE_COLUMNS} FROM leave_requests
             WHERE company_id = $1
             ORDER BY requested_at DESC"
        ))
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<LeaveRequest>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let maybe_request = sqlx::query_as::<_, LeaveRequest>(&format!(
            "SELECT {LEAVE_COLUMNS} FROM leave_requests WHERE id = $1 FOR UPDATE"
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
        status: LeaveStatus,
    ) -> Result<LeaveRequest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let request = sqlx::query_as::<_, LeaveRequest>(&format!(
            "UPDATE leave_requests SET status = $2 WHERE id = $1
             RETURNING {LEAVE_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_one(executor)
        .await?;
        Ok(request)
    }
}
