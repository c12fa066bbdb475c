use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::validation::Violations;
use models::{contrato, servicio};
use crate::errors::ServiceError;
use crate::input::double_option;

const NOT_FOUND: &str = "Servicio no encontrado";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewServicio {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio_base: Option<f64>,
    pub duracion_horas: Option<f64>,
}

/// Partial update. `descripcion: null` clears the description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServicioPatch {
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub descripcion: Option<Option<String>>,
    pub precio_base: Option<f64>,
    pub duracion_horas: Option<f64>,
}

pub async fn list_servicios(db: &DatabaseConnection) -> Result<Vec<servicio::Model>, ServiceError> {
    Ok(servicio::Entity::find().order_by_asc(servicio::Column::Id).all(db).await?)
}

pub async fn get_servicio(db: &DatabaseConnection, id: i32) -> Result<Option<servicio::Model>, ServiceError> {
    Ok(servicio::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input))]
pub async fn create_servicio(db: &DatabaseConnection, input: NewServicio) -> Result<servicio::Model, ServiceError> {
    let mut v = Violations::new();
    let mut am = servicio::ActiveModel { ..Default::default() };
    if let Some(n) = v.check(servicio::validate_nombre(input.nombre.as_deref())) { am.nombre = Set(n); }
    if let Some(p) = v.check(servicio::validate_precio_base(input.precio_base)) { am.precio_base = Set(p); }
    if let Some(d) = v.check(servicio::validate_duracion_horas(input.duracion_horas)) { am.duracion_horas = Set(d); }
    v.finish()?;
    am.descripcion = Set(input.descripcion);

    let created = am.insert(db).await?;
    info!(id = created.id, precio_base = created.precio_base, "servicio created");
    Ok(created)
}

#[instrument(skip(db, patch))]
pub async fn update_servicio(db: &DatabaseConnection, id: i32, patch: ServicioPatch) -> Result<servicio::Model, ServiceError> {
    let found = get_servicio(db, id).await?.ok_or_else(|| ServiceError::not_found(NOT_FOUND))?;
    let mut am: servicio::ActiveModel = found.clone().into();
    if let Some(n) = patch.nombre.as_deref() { am.nombre = Set(servicio::validate_nombre(Some(n))?); }
    if let Some(p) = patch.precio_base { am.precio_base = Set(servicio::validate_precio_base(Some(p))?); }
    if let Some(d) = patch.duracion_horas { am.duracion_horas = Set(servicio::validate_duracion_horas(Some(d))?); }
    if let Some(desc) = patch.descripcion { am.descripcion = Set(desc); }

    if !am.is_changed() {
        return Ok(found);
    }
    let updated = am.update(db).await?;
    info!(id, "servicio updated");
    Ok(updated)
}

/// Delete a service together with its contracts, in one transaction.
#[instrument(skip(db))]
pub async fn delete_servicio(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if servicio::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Err(ServiceError::not_found(NOT_FOUND));
    }
    let removed = contrato::Entity::delete_many()
        .filter(contrato::Column::ServicioId.eq(id))
        .exec(&txn)
        .await?
        .rows_affected;
    servicio::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(id, contratos_removed = removed, "servicio deleted");
    Ok(())
}
