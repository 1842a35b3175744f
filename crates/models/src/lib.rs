//! sea-orm entities for the relational backend plus connection helpers.
//!
//! Table and column names follow the schema the shop has always used, so an
//! existing database keeps working.

pub mod errors;
pub mod db;
pub mod usuario;
pub mod perfil;
pub mod agendamento;
pub mod review;
pub mod fidelidade;

#[cfg(test)]
mod tests;
