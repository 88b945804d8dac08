pub mod user_repo;
pub use user_repo::UserRepository;
pub mod company_repo;
pub use company_repo::CompanyRepository;
pub mod membership_repo;
pub use membership_repo::MembershipRepository;
pub mod attendance_repo;
pub use attendance_repo::AttendanceRepository;
pub mod leave_repo;
pub use leave_repo::LeaveRepository;
pub mod chat_repo;
pub use chat_repo::ChatRepository;
