use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Each index is skipped when present, so a run that stopped halfway
        // can be resumed.

        // Appointments: filtered by owner on the customer page
        if !manager.has_index("agendamentos", "idx_agendamentos_usuario").await? {
            manager
                .create_index(
                    Index::create()
                        .name("idx_agendamentos_usuario")
                        .table(Agendamentos::Table)
                        .col(Agendamentos::UsuarioId)
                        .to_owned(),
                )
                .await?;
        }

        // Loyalty: every adjustment looks the account up by owner
        if !manager.has_index("fidelidades", "idx_fidelidades_usuario").await? {
            manager
                .create_index(
                    Index::create()
                        .name("idx_fidelidades_usuario")
                        .table(Fidelidades::Table)
                        .col(Fidelidades::UsuarioId)
                        .to_owned(),
                )
                .await?;
        }

        // Profiles: login by name
        if !manager.has_index("perfis", "idx_perfis_nome").await? {
            manager
                .create_index(
                    Index::create()
                        .name("idx_perfis_nome")
                        .table(Perfis::Table)
                        .col(Perfis::Nome)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_perfis_nome").table(Perfis::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_fidelidades_usuario").table(Fidelidades::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_agendamentos_usuario").table(Agendamentos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Agendamentos { Table, UsuarioId }

#[derive(DeriveIden)]
enum Fidelidades { Table, UsuarioId }

#[derive(DeriveIden)]
enum Perfis { Table, Nome }
