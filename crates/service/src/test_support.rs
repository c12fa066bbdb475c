#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

/// Fresh in-memory SQLite database per test, migrated to the latest schema.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// A complete, valid company payload.
pub fn acme() -> crate::empresa_service::NewEmpresa {
    crate::empresa_service::NewEmpresa {
        nombre: Some("Acme Oficinas".into()),
        direccion: Some("Calle Mayor 1".into()),
        telefono: Some("600000001".into()),
        email: Some("a@b.com".into()),
    }
}

/// A complete, valid service payload with the given base price.
pub fn limpieza(precio_base: f64) -> crate::servicio_service::NewServicio {
    crate::servicio_service::NewServicio {
        nombre: Some("Limpieza".into()),
        descripcion: Some("Limpieza general de oficinas".into()),
        precio_base: Some(precio_base),
        duracion_horas: Some(2.0),
    }
}

pub async fn seed_empresa(db: &DatabaseConnection) -> Result<models::empresa::Model, anyhow::Error> {
    Ok(crate::empresa_service::create_empresa(db, acme()).await?)
}

pub async fn seed_servicio(db: &DatabaseConnection, precio_base: f64) -> Result<models::servicio::Model, anyhow::Error> {
    Ok(crate::servicio_service::create_servicio(db, limpieza(precio_base)).await?)
}
