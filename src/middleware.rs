pub mod auth;
pub mod access;
