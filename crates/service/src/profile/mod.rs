//! Customer profiles registered by name (separate from email accounts).

pub mod domain;
pub mod service;

pub use service::ProfileService;
