// src/common/access.rs

// A tabela de autorização do sistema inteiro: UMA função pura, com `match`
// exaustivo, consumida pelo middleware e pelos handlers. Nenhuma tela refaz
// seu próprio `if role == ...`.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::auth::Role;

// Toda ação visível em alguma tela
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    // Usuário sem empresa
    SearchCompanies,
    CreateCompany,
    ChatbotLookup,

    // Funcionário
    MarkAttendance,
    ViewOwnLeave,
    RequestLeave,
    CompanyChat,
    LeaveCompany,

    // Empregador
    TrackAttendance,
    ResolveJoinRequests,
    ResolveLeaveRequests,
    DeleteCompany,

    // Todos
    Logout,
}

// As telas navegáveis e o gate de entrada por papel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    Login,
    Signup,
    ForgotPassword,
    NewUserDashboard,
    SearchCompanies,
    Chatbot,
    Dashboard,
    Attendance,
    LeaveApplication,
    Chat,
    AcceptCandidates,
    Settings,
}

/// O conjunto de ações permitidas para um papel. Match exaustivo: adicionar
/// um papel novo obriga a decidir a linha dele aqui.
pub fn allowed_actions(role: Role) -> &'static [Action] {
    match role {
        Role::NewUser => &[
            Action::SearchCompanies,
            Action::CreateCompany,
            Action::ChatbotLookup,
            Action::Logout,
        ],
        Role::Employee => &[
            Action::MarkAttendance,
            Action::ViewOwnLeave,
            Action::RequestLeave,
            Action::CompanyChat,
            Action::LeaveCompany,
            Action::Logout,
        ],
        Role::Employer => &[
            Action::TrackAttendance,
            Action::ResolveJoinRequests,
            Action::ResolveLeaveRequests,
            Action::DeleteCompany,
            Action::CompanyChat,
            Action::Logout,
        ],
    }
}

pub fn is_allowed(role: Role, action: Action) -> bool {
    allowed_actions(role).contains(&action)
}

/// As telas alcançáveis por um papel (o grafo de navegação, achatado no
/// conjunto de destinos válidos).
pub fn allowed_screens(role: Role) -> &'static [Screen] {
    match role {
        Role::NewUser => &[
            Screen::Login,
            Screen::Signup,
            Screen::ForgotPassword,
            Screen::NewUserDashboard,
            Screen::SearchCompanies,
            Screen::Chatbot,
        ],
        Role::Employee => &[
            Screen::Login,
            Screen::Signup,
            Screen::ForgotPassword,
            Screen::Dashboard,
            Screen::Attendance,
            Screen::LeaveApplication,
            Screen::Chat,
            Screen::Settings,
        ],
        Role::Employer => &[
            Screen::Login,
            Screen::Signup,
            Screen::ForgotPassword,
            Screen::Dashboard,
            Screen::Attendance,
            Screen::LeaveApplication,
            Screen::AcceptCandidates,
            Screen::Chat,
            Screen::Settings,
        ],
    }
}

pub fn can_enter(role: Role, screen: Screen) -> bool {
    allowed_screens(role).contains(&screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELEVATED: [Action; 9] = [
        Action::MarkAttendance,
        Action::ViewOwnLeave,
        Action::RequestLeave,
        Action::CompanyChat,
        Action::LeaveCompany,
        Action::TrackAttendance,
        Action::ResolveJoinRequests,
        Action::ResolveLeaveRequests,
        Action::DeleteCompany,
    ];

    #[test]
    fn new_user_has_no_elevated_action() {
        for action in ELEVATED {
            assert!(
                !is_allowed(Role::NewUser, action),
                "NewUser não deveria ter {:?}",
                action
            );
        }
    }

    #[test]
    fn unresolved_role_defaults_to_new_user() {
        // Enquanto o perfil não carrega, o papel padrão não expõe nada elevado
        let role = Role::default();
        assert!(!is_allowed(role, Action::DeleteCompany));
        assert!(!is_allowed(role, Action::MarkAttendance));
        assert!(!is_allowed(role, Action::CompanyChat));
    }

    #[test]
    fn employee_can_mark_attendance_but_not_resolve_requests() {
        assert!(is_allowed(Role::Employee, Action::MarkAttendance));
        assert!(is_allowed(Role::Employee, Action::RequestLeave));
        assert!(is_allowed(Role::Employee, Action::CompanyChat));
        assert!(!is_allowed(Role::Employee, Action::ResolveJoinRequests));
        assert!(!is_allowed(Role::Employee, Action::ResolveLeaveRequests));
        assert!(!is_allowed(Role::Employee, Action::DeleteCompany));
    }

    #[test]
    fn employer_resolves_requests_but_does_not_mark_attendance() {
        assert!(is_allowed(Role::Employer, Action::TrackAttendance));
        assert!(is_allowed(Role::Employer, Action::ResolveJoinRequests));
        assert!(is_allowed(Role::Employer, Action::ResolveLeaveRequests));
        assert!(is_allowed(Role::Employer, Action::DeleteCompany));
        assert!(!is_allowed(Role::Employer, Action::MarkAttendance));
        assert!(!is_allowed(Role::Employer, Action::RequestLeave));
    }

    #[test]
    fn everyone_can_logout() {
        for role in [Role::NewUser, Role::Employee, Role::Employer] {
            assert!(is_allowed(role, Action::Logout));
        }
    }

    #[test]
    fn new_user_cannot_enter_member_screens() {
        for screen in [
            Screen::Dashboard,
            Screen::Attendance,
            Screen::LeaveApplication,
            Screen::Chat,
            Screen::AcceptCandidates,
            Screen::Settings,
        ] {
            assert!(!can_enter(Role::NewUser, screen));
        }
        assert!(can_enter(Role::NewUser, Screen::SearchCompanies));
        assert!(can_enter(Role::NewUser, Screen::Chatbot));
    }

    #[test]
    fn accept_candidates_is_employer_only() {
        assert!(can_enter(Role::Employer, Screen::AcceptCandidates));
        assert!(!can_enter(Role::Employee, Screen::AcceptCandidates));
        assert!(!can_enter(Role::NewUser, Screen::AcceptCandidates));
    }
}
