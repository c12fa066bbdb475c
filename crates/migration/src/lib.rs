//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_empresas;
mod m20240101_000002_create_servicios;
mod m20240101_000003_create_contratos;
mod m20240101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_empresas::Migration),
            Box::new(m20240101_000002_create_servicios::Migration),
            // contratos references both parents
            Box::new(m20240101_000003_create_contratos::Migration),
            Box::new(m20240101_000004_add_indexes::Migration),
        ]
    }
}
