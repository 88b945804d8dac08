pub mod access;
pub mod cooldown;
pub mod error;
