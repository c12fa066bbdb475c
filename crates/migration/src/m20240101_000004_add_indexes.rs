use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Cascading deletes look dependents up by parent id
        manager
            .create_index(
                Index::create()
                    .name("idx_contrato_empresa")
                    .table(Contratos::Table)
                    .col(Contratos::EmpresaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contrato_servicio")
                    .table(Contratos::Table)
                    .col(Contratos::ServicioId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contrato_empresa").table(Contratos::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contrato_servicio").table(Contratos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contratos { Table, EmpresaId, ServicioId }
