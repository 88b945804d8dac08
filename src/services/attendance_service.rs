// src/services/attendance_service.rs

use chrono::Utc;
use sqlx::PgPool;

use crate::{
    common::{cooldown, error::AppError},
    db::{AttendanceRepository, UserRepository},
    models::{attendance::AttendanceRecord, auth::User},
};

#[derive(Clone)]
pub struct AttendanceService {
    attendance_repo: AttendanceRepository,
    user_repo: UserRepository,
    pool: PgPool,
}

impl AttendanceService {
    pub fn new(
        attendance_repo: AttendanceRepository,
        user_repo: UserRepository,
        pool: PgPool,
    ) -> Self {
        Self { attendance_repo, user_repo, pool }
    }

    /// Marca presença respeitando a janela de 24h. A transação trava a linha
    /// do usuário ANTES de consultar o último registro, então duas
    /// submissões simultâneas serializam e a segunda vê a primeira.
    pub async fn mark(&self, user: &User) -> Result<AttendanceRecord, AppError> {
        let mut tx = self.pool.begin().await?;

        // 1. Trava o usuário (a âncora de serialização por usuário)
        let locked = self
            .user_repo
            .find_by_id_for_update(&mut *tx, user.id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let company_id = locked.company_id_or_err()?;

        // 2. Guarda de janela rolante sobre o último registro
        let latest = self
            .attendance_repo
            .latest_for_user(&mut *tx, locked.id)
            .await?;

        let now = Utc::now();
        if let Err(remaining) = cooldown::enforce_window(latest, now, cooldown::default_window()) {
            // Arredonda para cima: "faltam 0h" seria mentira
            let hours_remaining = (remaining.num_minutes() + 59) / 60;
            return Err(AppError::CooldownActive { hours_remaining });
        }

        // 3. Dentro da janela livre: grava
        let record = self
            .attendance_repo
            .insert(&mut *tx, locked.id, company_id, &locked.email, now)
            .await?;

        tx.commit().await?;
        Ok(record)
    }

    /// A visão do empregador sobre a presença da empresa inteira.
    pub async fn list_for_employer(
        &self,
        employer: &User,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let company_id = employer.company_id_or_err()?;
        self.attendance_repo.list_for_company(company_id).await
    }
}
