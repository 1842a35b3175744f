//! Migrator registering the VipCortes tables in dependency order.
//!
//! Every table is created only when missing, so the migrator can run against a
//! database populated by older deployments. Columns introduced later are added
//! after the tables exist, and indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_usuarios;
mod m20240501_000002_create_perfis;
mod m20240501_000003_create_agendamentos;
mod m20240501_000004_create_reviews;
mod m20240501_000005_create_fidelidades;
mod m20240501_000006_add_late_columns;
mod m20240501_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_usuarios::Migration),
            Box::new(m20240501_000002_create_perfis::Migration),
            Box::new(m20240501_000003_create_agendamentos::Migration),
            Box::new(m20240501_000004_create_reviews::Migration),
            Box::new(m20240501_000005_create_fidelidades::Migration),
            Box::new(m20240501_000006_add_late_columns::Migration),
            // Indexes should always be applied last
            Box::new(m20240501_000007_add_indexes::Migration),
        ]
    }
}
