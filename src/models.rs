pub mod auth;
pub mod company;
pub mod membership;
pub mod attendance;
pub mod leave;
pub mod chat;
