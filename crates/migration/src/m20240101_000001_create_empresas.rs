//! Create `empresas` table.
//!
//! Client companies that purchase cleaning services.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Empresas::Table)
                    .if_not_exists()
                    .col(pk_auto(Empresas::Id))
                    .col(string_len(Empresas::Nombre, 100).not_null())
                    .col(string_len(Empresas::Direccion, 200).not_null())
                    .col(string_len(Empresas::Telefono, 20).not_null())
                    .col(string_len(Empresas::Email, 100).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Empresas::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Empresas { Table, Id, Nombre, Direccion, Telefono, Email }
