//! Create `agendamentos` table: appointment requests.
//!
//! `usuario_id` is a weak reference to `usuarios`; no foreign key, no cascade.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agendamentos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Agendamentos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Agendamentos::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Agendamentos::Age).integer().null())
                    .col(ColumnDef::new(Agendamentos::Phone).string_len(20).null())
                    .col(ColumnDef::new(Agendamentos::Service).string_len(100).null())
                    .col(ColumnDef::new(Agendamentos::DataAgendamento).date().null())
                    .col(ColumnDef::new(Agendamentos::Hora).time().null())
                    .col(ColumnDef::new(Agendamentos::Observacoes).text().null())
                    .col(ColumnDef::new(Agendamentos::UsuarioId).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Agendamentos::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Agendamentos { Table, Id, Name, Age, Phone, Service, DataAgendamento, Hora, Observacoes, UsuarioId }
