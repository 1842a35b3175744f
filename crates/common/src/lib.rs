//! Shared building blocks for the VipCortes crates: logging setup,
//! response types and data-directory helpers.

pub mod types;
pub mod env;

pub mod utils {
    pub mod logging;
}
