// src/middleware/access.rs

// O guardião de ações. Esconder botão no cliente não é autorização: o
// servidor recusa a requisição cujo papel não inclui a ação, consultando a
// tabela pura de common::access (nenhuma ida ao banco).

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{
    common::{
        access::{self, Action},
        error::AppError,
    },
    models::auth::User,
};

/// 1. O trait que define o que é uma Ação exigível
pub trait ActionDef: Send + Sync + 'static {
    fn action() -> Action;
    fn slug() -> &'static str;
}

/// 2. O extrator (guardião). Colocar `RequireAction<CanDeleteCompany>` na
/// assinatura do handler é o gate inteiro.
pub struct RequireAction<T>(pub PhantomData<T>);

// 3. Implementação do FromRequestParts
impl<T, S> FromRequestParts<S> for RequireAction<T>
where
    T: ActionDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A. Extrai o usuário colocado pelo auth_guard
        let user = parts
            .extensions
            .get::<User>()
            .ok_or(AppError::InvalidToken)?;

        // B. Consulta a tabela de autorização
        if !access::is_allowed(user.role, T::action()) {
            return Err(AppError::ActionNotAllowed(T::slug()));
        }

        Ok(RequireAction(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS AÇÕES (TIPOS)
// ---

macro_rules! action_def {
    ($name:ident, $action:expr, $slug:literal) => {
        pub struct $name;
        impl ActionDef for $name {
            fn action() -> Action {
                $action
            }
            fn slug() -> &'static str {
                $slug
            }
        }
    };
}

action_def!(CanSearchCompanies, Action::SearchCompanies, "searchCompanies");
action_def!(CanCreateCompany, Action::CreateCompany, "createCompany");
action_def!(CanChatbotLookup, Action::ChatbotLookup, "chatbotLookup");
action_def!(CanMarkAttendance, Action::MarkAttendance, "markAttendance");
action_def!(CanViewOwnLeave, Action::ViewOwnLeave, "viewOwnLeave");
action_def!(CanRequestLeave, Action::RequestLeave, "requestLeave");
action_def!(CanCompanyChat, Action::CompanyChat, "companyChat");
action_def!(CanLeaveCompany, Action::LeaveCompany, "leaveCompany");
action_def!(CanTrackAttendance, Action::TrackAttendance, "trackAttendance");
action_def!(CanResolveJoinRequests, Action::ResolveJoinRequests, "resolveJoinRequests");
action_def!(CanResolveLeaveRequests, Action::ResolveLeaveRequests, "resolveLeaveRequests");
action_def!(CanDeleteCompany, Action::DeleteCompany, "deleteCompany");

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::models::auth::Role;

    fn user_with_role(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            contact_number: "+5511999990000".to_string(),
            role,
            company_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn parts_for(user: Option<User>) -> Parts {
        let request = Request::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        if let Some(user) = user {
            parts.extensions.insert(user);
        }
        parts
    }

    #[tokio::test]
    async fn new_user_is_rejected_for_employer_action() {
        let mut parts = parts_for(Some(user_with_role(Role::NewUser)));
        let result = RequireAction::<CanDeleteCompany>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::ActionNotAllowed("deleteCompany"))));
    }

    #[tokio::test]
    async fn employee_passes_attendance_gate() {
        let mut parts = parts_for(Some(user_with_role(Role::Employee)));
        let result = RequireAction::<CanMarkAttendance>::from_request_parts(&mut parts, &()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_session_is_rejected_as_invalid_token() {
        let mut parts = parts_for(None);
        let result = RequireAction::<CanCompanyChat>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
