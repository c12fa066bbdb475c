//! Create `contratos` table with FKs to `empresas` and `servicios`.
//!
//! Both FKs cascade on delete; the service layer removes dependents as well.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contratos::Table)
                    .if_not_exists()
                    .col(pk_auto(Contratos::Id))
                    .col(integer(Contratos::EmpresaId).not_null())
                    .col(integer(Contratos::ServicioId).not_null())
                    .col(date(Contratos::FechaInicio).not_null())
                    .col(date_null(Contratos::FechaFin))
                    .col(string_len(Contratos::Estado, 20).not_null().default("activo"))
                    .col(double(Contratos::PrecioFinal).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contrato_empresa")
                            .from(Contratos::Table, Contratos::EmpresaId)
                            .to(Empresas::Table, Empresas::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contrato_servicio")
                            .from(Contratos::Table, Contratos::ServicioId)
                            .to(Servicios::Table, Servicios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contratos::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contratos { Table, Id, EmpresaId, ServicioId, FechaInicio, FechaFin, Estado, PrecioFinal }

#[derive(DeriveIden)]
enum Empresas { Table, Id }

#[derive(DeriveIden)]
enum Servicios { Table, Id }
