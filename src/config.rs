// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        AttendanceRepository, ChatRepository, CompanyRepository, LeaveRepository,
        MembershipRepository, UserRepository,
    },
    services::{
        AttendanceService, AuthService, ChatService, CompanyService, LeaveService,
        MembershipService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub company_service: CompanyService,
    pub membership_service: MembershipService,
    pub attendance_service: AttendanceService,
    pub leave_service: LeaveService,
    pub chat_service: ChatService,
}

impl AppState {
    // Carrega as configurações e monta o gráfico de dependências.
    // Retorna Result: se a configuração falhar, a aplicação não deve iniciar.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let company_repo = CompanyRepository::new(db_pool.clone());
        let membership_repo = MembershipRepository::new(db_pool.clone());
        let attendance_repo = AttendanceRepository::new(db_pool.clone());
        let leave_repo = LeaveRepository::new(db_pool.clone());
        let chat_repo = ChatRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret, db_pool.clone());
        let company_service =
            CompanyService::new(company_repo.clone(), user_repo.clone(), db_pool.clone());
        let membership_service = MembershipService::new(
            membership_repo,
            user_repo.clone(),
            company_repo,
            db_pool.clone(),
        );
        let attendance_service =
            AttendanceService::new(attendance_repo, user_repo.clone(), db_pool.clone());
        let leave_service = LeaveService::new(leave_repo, user_repo, db_pool.clone());
        let chat_service = ChatService::new(chat_repo);

        Ok(Self {
            db_pool,
            auth_service,
            company_service,
            membership_service,
            attendance_service,
            leave_service,
            chat_service,
        })
    }
}
