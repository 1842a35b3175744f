//! Create `fidelidades` table: loyalty accounts, one per customer.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fidelidades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fidelidades::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fidelidades::UsuarioId).integer().null())
                    .col(ColumnDef::new(Fidelidades::Pontos).integer().not_null().default(0))
                    .col(ColumnDef::new(Fidelidades::Status).string_len(20).not_null().default("ativo"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Fidelidades::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Fidelidades { Table, Id, UsuarioId, Pontos, Status }
