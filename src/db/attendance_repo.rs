// src/db/attendance_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::attendance::AttendanceRecord};

// Repositório do log de presença. Só INSERT e SELECT: o log é imutável.
#[derive(Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// O timestamp da marcação mais recente do usuário. Roda dentro da
    /// transação do serviço para enxergar o estado travado.
    pub async fn latest_for_user<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Option<DateTime<Utc>>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let latest = sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT recorded_at FROM attendance
             WHERE user_id = $1
             ORDER BY recorded_at DESC
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
        company_id: Uuid,
        email: &str,
        recorded_at: DateTime<Utc>,
    ) -> Result<AttendanceRecord, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let record = sqlx::query_as::<_, AttendanceRecord>(
            "INSERT INTO attendance (user_id, company_id, email, recorded_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, company_id, email, recorded_at",
        )
        .bind(user_id)
        .bind(company_id)
        .bind(email)
        .bind(recorded_at)
        .fetch_one(executor)
        .await?;
        Ok(record)
    }

    // A visão do empregador: todas as marcações da empresa, mais recentes primeiro
    pub async fn list_for_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT id, user_id, company_id, email, recorded_at
             FROM attendance
             WHERE company_id = $1
             ORDER BY recorded_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}
