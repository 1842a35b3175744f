//! Create `usuarios` table: email-registered customers.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Name).string_len(100).not_null())
                    // NULL emails are allowed more than once; present ones are unique
                    .col(ColumnDef::new(Usuarios::Email).string_len(100).null().unique_key())
                    .col(ColumnDef::new(Usuarios::Password).string_len(255).not_null())
                    .col(ColumnDef::new(Usuarios::Phone).string_len(20).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Usuarios::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Usuarios { Table, Id, Name, Email, Password, Phone }
