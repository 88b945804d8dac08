// src/services/leave_service.rs

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{cooldown, error::AppError},
    db::{LeaveRepository, UserRepository},
    models::{
        auth::User,
        leave::{LeaveRequest, LeaveStatus},
    },
};

#[derive(Clone)]
pub struct LeaveService {
    leave_repo: LeaveRepository,
    user_repo: UserRepository,
    pool: PgPool,
}

impl LeaveService {
    pub fn new(leave_repo: LeaveRepository, user_repo: UserRepository, pool: PgPool) -> Self {
        Self { leave_repo, user_repo, pool }
    }

    /// Pede licença. Mesma guarda de 24h da presença, mesma âncora de
    /// serialização (a linha do usuário travada na transação).
    pub async fn request_leave(&self, user: &User, reason: &str) -> Result<LeaveRequest, AppError> {
        let mut tx = self.pool.begin().await?;

        let locked = self
            .user_repo
            .find_by_id_for_update(&mut *tx, user.id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let company_id = locked.company_id_or_err()?;

        let latest = self.leave_repo.latest_for_user(&mut *tx, locked.id).await?;

        let now = Utc::now();
        if let Err(remaining) = cooldown::enforce_window(latest, now, cooldown::default_window()) {
            let hours_remaining = (remaining.num_minutes() + 59) / 60;
            return Err(AppError::CooldownActive { hours_remaining });
        }

        let request = self
            .leave_repo
            .insert(&mut *tx, locked.id, &locked.email, company_id, now, reason)
            .await?;

        tx.commit().await?;
        Ok(request)
    }

    /// O histórico do próprio funcionário (status dos pedidos).
    pub async fn my_requests(&self, user: &User) -> Result<Vec<LeaveRequest>, AppError> {
        self.leave_repo.list_for_user(user.id).await
    }

    /// A fila do empregador: todos os pedidos da empresa.
    pub async fn list_for_employer(&self, employer: &User) -> Result<Vec<LeaveRequest>, AppError> {
        let company_id = employer.company_id_or_err()?;
        self.leave_repo.list_for_company(company_id).await
    }

    pub async fn grant(&self, employer: &User, request_id: Uuid) -> Result<LeaveRequest, AppError> {
        self.resolve(employer, request_id, LeaveStatus::Granted).await
    }

    pub async fn reject(&self, employer: &User, request_id: Uuid) -> Result<LeaveRequest, AppError> {
        self.resolve(employer, request_id, LeaveStatus::Rejected).await
    }

    // Conceder e rejeitar são a mesma transição pendente -> terminal
    async fn resolve(
        &self,
        employer: &User,
        request_id: Uuid,
        status: LeaveStatus,
    ) -> Result<LeaveRequest, AppError> {
        let employer_company = employer.company_id_or_err()?;

        let mut tx = self.pool.begin().await?;

        let request = self
            .leave_repo
            .find_by_id_for_update(&mut *tx, request_id)
            .await?
            .ok_or(AppError::LeaveRequestNotFound)?;

        if request.company_id != employer_company {
            return Err(AppError::LeaveRequestNotFound);
        }

        if request.status.is_terminal() {
            return Err(AppError::RequestAlreadyResolved);
        }

        let resolved = self.leave_repo.set_status(&mut *tx, request.id, status).await?;

        tx.commit().await?;
        Ok(resolved)
    }
}
