// src/db/company_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::company::{Company, CompanySummary},
};

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let maybe_company = sqlx::query_as::<_, Company>(
            "SELECT id, name, created_by, created_at FROM companies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_company)
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, AppError> {
        // SELECT EXISTS: a consulta mais barata possível para a checagem prévia
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM companies WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    // A lista usada pela tela de busca e pelo seletor do chatbot
    pub async fn list_all(&self) -> Result<Vec<Company>, AppError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT id, name, created_by, created_at FROM companies ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(companies)
    }

    pub async fn create_company<'e, E>(
        &self,
        executor: E,
        name: &str,
        created_by: Uuid,
    ) -> Result<Company, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let company = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (name, created_by)
             VALUES ($1, $2)
             RETURNING id, name, created_by, created_at",
        )
        .bind(name)
        .bind(created_by)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                // A checagem prévia de nome pode perder a corrida; a
                // constraint UNIQUE é o árbitro final.
                if db_err.is_unique_violation() {
                    return AppError::CompanyNameAlreadyExists(name.to_string());
                }
            }
            e.into()
        })?;

        Ok(company)
    }

    pub async fn delete_company<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// O resumo que o chatbot mostra: membros, data de criação e o e-mail
    /// do empregador (o primeiro, se houver mais de um por algum motivo).
    pub async fn summary(&self, id: Uuid) -> Result<Option<CompanySummary>, AppError> {
        let maybe_summary = sqlx::query_as::<_, CompanySummary>(
            "SELECT
                c.id,
                c.name,
                c.created_at,
                (SELECT COUNT(*) FROM users u WHERE u.company_id = c.id) AS member_count,
                (SELECT u.email FROM users u
                  WHERE u.company_id = c.id AND u.role = 'employer'
                  ORDER BY u.created_at ASC LIMIT 1) AS employer_email
             FROM companies c
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_summary)
    }
}
