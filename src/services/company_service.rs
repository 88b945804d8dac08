// src/services/company_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CompanyRepository, UserRepository},
    models::{
        auth::{Role, User},
        company::{Company, CompanySummary},
    },
};

#[derive(Clone)]
pub struct CompanyService {
    company_repo: CompanyRepository,
    user_repo: UserRepository,
    pool: PgPool, // Usamos a pool para iniciar transações
}

impl CompanyService {
    pub fn new(company_repo: CompanyRepository, user_repo: UserRepository, pool: PgPool) -> Self {
        Self { company_repo, user_repo, pool }
    }

    /// LÓGICA DE NEGÓCIO: cria a empresa E promove o criador a employer na
    /// mesma transação. Nunca existe empresa sem dono.
    pub async fn create_company_with_owner(
        &self,
        name: &str,
        owner: &User,
    ) -> Result<Company, AppError> {
        // Checagem rápida no snapshot da sessão
        owner.ensure_unaffiliated()?;

        // Checagem prévia amigável; a constraint UNIQUE cobre a corrida.
        if self.company_repo.name_exists(name).await? {
            return Err(AppError::CompanyNameAlreadyExists(name.to_string()));
        }

        // 1. Inicia a transação
        let mut tx = self.pool.begin().await?;

        // 2. Trava e relê o criador: duas criações simultâneas do mesmo
        // usuário serializam aqui, e a segunda vê o vínculo da primeira.
        let locked = self
            .user_repo
            .find_by_id_for_update(&mut *tx, owner.id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        locked.ensure_unaffiliated()?;

        // 3. Cria a empresa
        let company = self
            .company_repo
            .create_company(&mut *tx, name, locked.id)
            .await?;

        // 4. Promove o criador: role=employer, company_id preenchido
        self.user_repo
            .attach_to_company(&mut *tx, locked.id, company.id, Role::Employer)
            .await?;

        // 5. Commit
        tx.commit().await?;

        tracing::info!("🏢 Empresa '{}' criada por {}", company.name, locked.id);
        Ok(company)
    }

    /// A cascata da exclusão: desassocia todos os membros E apaga a empresa
    /// na MESMA transação. Sem janela de empresa órfã.
    pub async fn delete_company(&self, owner: &User) -> Result<(), AppError> {
        let company_id = owner.company_id_or_err()?;

        let mut tx = self.pool.begin().await?;

        let detached = self
            .user_repo
            .detach_all_from_company(&mut *tx, company_id)
            .await?;

        let deleted = self.company_repo.delete_company(&mut *tx, company_id).await?;
        // Se outro processo apagou primeiro, o rollback desfaz a desassociação
        ensure_deleted(deleted)?;

        tx.commit().await?;

        tracing::info!(
            "🗑️ Empresa {} excluída; {} usuários voltaram a new_user",
            company_id,
            detached
        );
        Ok(())
    }

    /// Sair da empresa: só afeta o próprio usuário. O vínculo é relido na
    /// linha travada, não no snapshot da sessão.
    pub async fn leave_company(&self, user: &User) -> Result<User, AppError> {
        user.company_id_or_err()?;

        let mut tx = self.pool.begin().await?;

        let locked = self
            .user_repo
            .find_by_id_for_update(&mut *tx, user.id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        locked.company_id_or_err()?;

        let updated = self.user_repo.detach_from_company(&mut *tx, locked.id).await?;

        tx.commit().await?;
        Ok(updated)
    }

    // A lista da tela de busca / seletor do chatbot
    pub async fn list_companies(&self) -> Result<Vec<Company>, AppError> {
        self.company_repo.list_all().await
    }

    // O resumo que o chatbot responde sobre uma empresa
    pub async fn company_summary(&self, company_id: Uuid) -> Result<CompanySummary, AppError> {
        self.company_repo
            .summary(company_id)
            .await?
            .ok_or(AppError::CompanyNotFound)
    }
}

// O DELETE reporta quantas linhas sumiram; zero linhas significa que a
// empresa já não existia e a transação deve ser desfeita.
fn ensure_deleted(rows: u64) -> Result<(), AppError> {
    if rows == 0 {
        return Err(AppError::CompanyNotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleting_a_missing_company_is_not_found() {
        assert!(matches!(ensure_deleted(0), Err(AppError::CompanyNotFound)));
    }

    #[test]
    fn deleting_an_existing_company_succeeds() {
        assert!(ensure_deleted(1).is_ok());
    }
}
