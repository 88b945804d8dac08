pub mod auth;
pub use auth::AuthService;
pub mod company_service;
pub use company_service::CompanyService;
pub mod membership_service;
pub use membership_service::MembershipService;
pub mod attendance_service;
pub use attendance_service::AttendanceService;
pub mod leave_service;
pub use leave_service::LeaveService;
pub mod chat_service;
pub use chat_service::ChatService;
