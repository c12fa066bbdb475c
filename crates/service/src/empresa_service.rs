use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::validation::Violations;
use models::{contrato, empresa};
use crate::errors::ServiceError;

const NOT_FOUND: &str = "Empresa no encontrada";

/// Payload for creating a company. Every field is required; `None` reports as missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewEmpresa {
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

/// Partial update; only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EmpresaPatch {
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

/// List all companies ordered by id.
pub async fn list_empresas(db: &DatabaseConnection) -> Result<Vec<empresa::Model>, ServiceError> {
    Ok(empresa::Entity::find().order_by_asc(empresa::Column::Id).all(db).await?)
}

/// Get company by id.
pub async fn get_empresa(db: &DatabaseConnection, id: i32) -> Result<Option<empresa::Model>, ServiceError> {
    Ok(empresa::Entity::find_by_id(id).one(db).await?)
}

/// Create a company, reporting all field violations together.
#[instrument(skip(db, input))]
pub async fn create_empresa(db: &DatabaseConnection, input: NewEmpresa) -> Result<empresa::Model, ServiceError> {
    let mut v = Violations::new();
    let mut am = empresa::ActiveModel { ..Default::default() };
    if let Some(n) = v.check(empresa::validate_nombre(input.nombre.as_deref())) { am.nombre = Set(n); }
    if let Some(d) = v.check(empresa::validate_direccion(input.direccion.as_deref())) { am.direccion = Set(d); }
    if let Some(t) = v.check(empresa::validate_telefono(input.telefono.as_deref())) { am.telefono = Set(t); }
    if let Some(e) = v.check(empresa::validate_email(input.email.as_deref())) { am.email = Set(e); }
    v.finish()?;

    let created = am.insert(db).await?;
    info!(id = created.id, "empresa created");
    Ok(created)
}

/// Update the supplied fields of a company; the first violation is returned.
#[instrument(skip(db, patch))]
pub async fn update_empresa(db: &DatabaseConnection, id: i32, patch: EmpresaPatch) -> Result<empresa::Model, ServiceError> {
    let found = get_empresa(db, id).await?.ok_or_else(|| ServiceError::not_found(NOT_FOUND))?;
    let mut am: empresa::ActiveModel = found.clone().into();
    if let Some(n) = patch.nombre.as_deref() { am.nombre = Set(empresa::validate_nombre(Some(n))?); }
    if let Some(d) = patch.direccion.as_deref() { am.direccion = Set(empresa::validate_direccion(Some(d))?); }
    if let Some(t) = patch.telefono.as_deref() { am.telefono = Set(empresa::validate_telefono(Some(t))?); }
    if let Some(e) = patch.email.as_deref() { am.email = Set(empresa::validate_email(Some(e))?); }

    if !am.is_changed() {
        return Ok(found);
    }
    let updated = am.update(db).await?;
    info!(id, "empresa updated");
    Ok(updated)
}

/// Delete a company together with its contracts, in one transaction.
#[instrument(skip(db))]
pub async fn delete_empresa(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if empresa::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Err(ServiceError::not_found(NOT_FOUND));
    }
    let removed = contrato::Entity::delete_many()
        .filter(contrato::Column::EmpresaId.eq(id))
        .exec(&txn)
        .await?
        .rows_affected;
    empresa::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(id, contratos_removed = removed, "empresa deleted");
    Ok(())
}
