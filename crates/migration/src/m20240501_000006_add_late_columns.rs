//! Add columns that older deployments created their tables without.
//!
//! `reviews.rating` and `agendamentos.usuario_id` arrived after the first
//! schema; tables created by this migrator already carry them, so each column
//! is only added when the probe says it is missing.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_column("reviews", "rating").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Reviews::Table)
                        .add_column(ColumnDef::new(Reviews::Rating).integer().not_null().default(0))
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_column("agendamentos", "usuario_id").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Agendamentos::Table)
                        .add_column(ColumnDef::new(Agendamentos::UsuarioId).integer().null())
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // The columns belong to the create migrations on fresh databases.
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Reviews { Table, Rating }

#[derive(DeriveIden)]
enum Agendamentos { Table, UsuarioId }
