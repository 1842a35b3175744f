//! Create `perfis` table: simplified profiles registered by name and phone.
//!
//! Kept apart from `usuarios`; the two collections do not share ids.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Perfis::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Perfis::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Perfis::Nome).string_len(100).not_null())
                    .col(ColumnDef::new(Perfis::Telefone).string_len(20).not_null())
                    .col(ColumnDef::new(Perfis::Nascimento).date().not_null())
                    .col(ColumnDef::new(Perfis::Senha).string_len(255).not_null())
                    .col(ColumnDef::new(Perfis::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Perfis::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Perfis { Table, Id, Nome, Telefone, Nascimento, Senha, CreatedAt }
