//! Auth module: domain types, password hashing and the signup/login service.

pub mod domain;
pub mod password;
pub mod service;

pub use password::PasswordHasher;
pub use service::AuthService;
