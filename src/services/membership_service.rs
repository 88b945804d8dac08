// src/services/membership_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CompanyRepository, MembershipRepository, UserRepository},
    models::{
        auth::{Role, User},
        membership::{acceptance_guard, JoinRequest, JoinRequestStatus},
    },
};

#[derive(Clone)]
pub struct MembershipService {
    membership_repo: MembershipRepository,
    user_repo: UserRepository,
    company_repo: CompanyRepository,
    pool: PgPool,
}

impl MembershipService {
    pub fn new(
        membership_repo: MembershipRepository,
        user_repo: UserRepository,
        company_repo: CompanyRepository,
        pool: PgPool,
    ) -> Self {
        Self { membership_repo, user_repo, company_repo, pool }
    }

    /// Um usuário sem empresa se candidata a uma empresa existente.
    pub async fn apply(
        &self,
        user: &User,
        company_id: Uuid,
        description: &str,
    ) -> Result<JoinRequest, AppError> {
        user.ensure_unaffiliated()?;

        let company = self
            .company_repo
            .find_by_id(company_id)
            .await?
            .ok_or(AppError::CompanyNotFound)?;

        // O pedido carrega e-mail e nome desnormalizados: a tela do
        // empregador lista sem joins.
        self.membership_repo
            .create_request(
                &self.pool,
                user.id,
                &user.email,
                company.id,
                &company.name,
                description,
            )
            .await
    }

    /// A lista de candidatos da empresa do empregador.
    pub async fn list_for_employer(&self, employer: &User) -> Result<Vec<JoinRequest>, AppError> {
        let company_id = employer.company_id_or_err()?;
        self.membership_repo.list_for_company(company_id).await
    }

    /// LÓGICA DE NEGÓCIO: aceitar um candidato. Pedido e usuário são
    /// travados e re-checados DENTRO da transação, e as duas escritas
    /// (status do pedido + vínculo do usuário) saem juntas ou não saem.
    pub async fn accept(&self, employer: &User, request_id: Uuid) -> Result<JoinRequest, AppError> {
        let employer_company = employer.company_id_or_err()?;

        let mut tx = self.pool.begin().await?;

        // 1. Trava o pedido e confere que continua pendente
        let request = self
            .membership_repo
            .find_by_id_for_update(&mut *tx, request_id)
            .await?
            .ok_or(AppError::JoinRequestNotFound)?;

        // Um empregador só resolve pedidos da própria empresa
        if request.company_id != employer_company {
            return Err(AppError::JoinRequestNotFound);
        }

        // 2. Trava o candidato; a pré-condição roda sobre as linhas travadas.
        // Se ele já entrou em outra empresa, o aceite é um no-op sobre ele.
        let candidate = self
            .user_repo
            .find_by_id_for_update(&mut *tx, request.user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        acceptance_guard(request.status, candidate.company_id)?;

        // 3. As duas escritas, na mesma transação
        let accepted = self
            .membership_repo
            .set_status(&mut *tx, request.id, JoinRequestStatus::Accepted)
            .await?;

        self.user_repo
            .attach_to_company(&mut *tx, candidate.id, request.company_id, Role::Employee)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "✅ Candidato {} aceito na empresa {}",
            candidate.id,
            request.company_id
        );
        Ok(accepted)
    }

    /// Rejeitar só muda o status do pedido; o usuário não é tocado.
    pub async fn reject(&self, employer: &User, request_id: Uuid) -> Result<JoinRequest, AppError> {
        let employer_company = employer.company_id_or_err()?;

        let mut tx = self.pool.begin().await?;

        let request = self
            .membership_repo
            .find_by_id_for_update(&mut *tx, request_id)
            .await?
            .ok_or(AppError::JoinRequestNotFound)?;

        if request.company_id != employer_company {
            return Err(AppError::JoinRequestNotFound);
        }

        if request.status.is_terminal() {
            return Err(AppError::RequestAlreadyResolved);
        }

        let rejected = self
            .membership_repo
            .set_status(&mut *tx, request.id, JoinRequestStatus::Rejected)
            .await?;

        tx.commit().await?;
        Ok(rejected)
    }
}
