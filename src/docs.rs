// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::forgot_password,
        handlers::auth::reset_password,

        // --- Users ---
        handlers::auth::get_me,
        handlers::auth::get_my_navigation,

        // --- Companies ---
        handlers::company::create_company,
        handlers::company::list_companies,
        handlers::company::company_summary,
        handlers::company::delete_company,
        handlers::company::leave_company,

        // --- Join Requests ---
        handlers::membership::create_join_request,
        handlers::membership::list_join_requests,
        handlers::membership::accept_join_request,
        handlers::membership::reject_join_request,

        // --- Attendance ---
        handlers::attendance::mark_attendance,
        handlers::attendance::list_attendance,

        // --- Leave ---
        handlers::leave::create_leave_request,
        handlers::leave::my_leave_requests,
        handlers::leave::list_leave_requests,
        handlers::leave::grant_leave,
        handlers::leave::reject_leave,

        // --- Chat ---
        handlers::chat::send_message,
        handlers::chat::list_messages,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Role,
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::ForgotPasswordPayload,
            models::auth::ResetPasswordPayload,
            models::auth::AuthResponse,
            models::auth::ResetTokenResponse,
            handlers::auth::NavigationResponse,

            // --- Navegação ---
            crate::common::access::Action,
            crate::common::access::Screen,

            // --- Companies ---
            models::company::Company,
            models::company::CompanySummary,
            models::company::CreateCompanyPayload,

            // --- Join Requests ---
            models::membership::JoinRequestStatus,
            models::membership::JoinRequest,
            models::membership::CreateJoinRequestPayload,

            // --- Attendance ---
            models::attendance::AttendanceRecord,

            // --- Leave ---
            models::leave::LeaveStatus,
            models::leave::LeaveRequest,
            models::leave::CreateLeaveRequestPayload,

            // --- Chat ---
            models::chat::Message,
            models::chat::SendMessagePayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação, Registro e Redefinição de Senha"),
        (name = "Users", description = "Perfil da Sessão e Navegação Permitida"),
        (name = "Companies", description = "Criação, Busca, Consulta e Exclusão de Empresas"),
        (name = "JoinRequests", description = "Candidaturas e Aceite de Membros"),
        (name = "Attendance", description = "Marcação e Acompanhamento de Presença"),
        (name = "Leave", description = "Pedidos de Licença e Resolução"),
        (name = "Chat", description = "Chat Interno da Empresa")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme("api_jwt", SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)));
    }
}
