//! Service layer for the booking backend.
//! - Record stores with a database and a JSON file implementation.
//! - Storage mode selection at startup with fallback to files.
//! - Business services (accounts, profiles, appointments, reviews, loyalty)
//!   that behave the same whichever backend is active.

pub mod errors;
pub mod coerce;
pub mod serde_ext;
pub mod storage;
pub mod auth;
pub mod profile;
pub mod appointment;
pub mod review;
pub mod loyalty;
pub mod app;
#[cfg(test)]
pub mod test_support;

pub use app::AppServices;
pub use errors::ServiceError;
