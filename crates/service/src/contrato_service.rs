use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use models::contrato::{self, ContratoDetail, DateError, Estado, FechaCampo};
use models::validation::Violations;
use models::{empresa, servicio};
use crate::errors::ServiceError;
use crate::input::double_option;

const NOT_FOUND: &str = "Contrato no encontrado";
const EMPRESA_REQUERIDA: &str = "El ID de empresa es requerido";
const EMPRESA_INEXISTENTE: &str = "La empresa especificada no existe";
const SERVICIO_REQUERIDO: &str = "El ID de servicio es requerido";
const SERVICIO_INEXISTENTE: &str = "El servicio especificado no existe";

/// Payload for a new contract. Dates are `YYYY-MM-DD` strings so that a
/// malformed value is reported as a validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewContrato {
    pub empresa_id: Option<i32>,
    pub servicio_id: Option<i32>,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub estado: Option<String>,
    pub precio_final: Option<f64>,
}

/// Partial update. `fecha_fin: null` clears the end date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContratoPatch {
    pub empresa_id: Option<i32>,
    pub servicio_id: Option<i32>,
    pub fecha_inicio: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub fecha_fin: Option<Option<String>>,
    pub estado: Option<String>,
    pub precio_final: Option<f64>,
}

/// Local calendar date used for the "not before today" rule.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Zero ids and zero prices count as not supplied.
fn supplied_id(id: Option<i32>) -> Option<i32> {
    id.filter(|id| *id != 0)
}

fn non_blank(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|s| !s.trim().is_empty())
}

async fn detail(db: &DatabaseConnection, c: contrato::Model) -> Result<ContratoDetail, ServiceError> {
    let empresa = empresa::Entity::find_by_id(c.empresa_id).one(db).await?;
    let servicio = servicio::Entity::find_by_id(c.servicio_id).one(db).await?;
    Ok(ContratoDetail { contrato: c, empresa, servicio })
}

/// List all contracts ordered by id, each with its company and service.
pub async fn list_contratos(db: &DatabaseConnection) -> Result<Vec<ContratoDetail>, ServiceError> {
    let rows = contrato::Entity::find().order_by_asc(contrato::Column::Id).all(db).await?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let empresa_ids: Vec<i32> = rows.iter().map(|c| c.empresa_id).collect();
    let servicio_ids: Vec<i32> = rows.iter().map(|c| c.servicio_id).collect();
    let empresas: HashMap<i32, empresa::Model> = empresa::Entity::find()
        .filter(empresa::Column::Id.is_in(empresa_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|e| (e.id, e))
        .collect();
    let servicios: HashMap<i32, servicio::Model> = servicio::Entity::find()
        .filter(servicio::Column::Id.is_in(servicio_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    Ok(rows
        .into_iter()
        .map(|c| ContratoDetail {
            empresa: empresas.get(&c.empresa_id).cloned(),
            servicio: servicios.get(&c.servicio_id).cloned(),
            contrato: c,
        })
        .collect())
}

pub async fn get_contrato(db: &DatabaseConnection, id: i32) -> Result<Option<ContratoDetail>, ServiceError> {
    match contrato::Entity::find_by_id(id).one(db).await? {
        Some(c) => Ok(Some(detail(db, c).await?)),
        None => Ok(None),
    }
}

/// Create a contract as of the current local date.
pub async fn create_contrato(db: &DatabaseConnection, input: NewContrato) -> Result<ContratoDetail, ServiceError> {
    create_contrato_on(db, input, today()).await
}

/// Create a contract, checking the start date against `today`.
///
/// Every violation is collected and reported as one message. When the
/// service resolves and no (or a zero) final price is given, the service's
/// base price is used.
#[instrument(skip(db, input), fields(empresa_id = ?input.empresa_id, servicio_id = ?input.servicio_id))]
pub async fn create_contrato_on(
    db: &DatabaseConnection,
    input: NewContrato,
    today: NaiveDate,
) -> Result<ContratoDetail, ServiceError> {
    let mut v = Violations::new();
    let mut am = contrato::ActiveModel { ..Default::default() };

    match supplied_id(input.empresa_id) {
        None => v.push(EMPRESA_REQUERIDA),
        Some(id) => match empresa::Entity::find_by_id(id).one(db).await? {
            Some(_) => am.empresa_id = Set(id),
            None => v.push(EMPRESA_INEXISTENTE),
        },
    }

    let mut precio_final = input.precio_final.filter(|p| *p != 0.0);
    match supplied_id(input.servicio_id) {
        None => v.push(SERVICIO_REQUERIDO),
        Some(id) => match servicio::Entity::find_by_id(id).one(db).await? {
            Some(s) => {
                am.servicio_id = Set(id);
                if precio_final.is_none() {
                    precio_final = Some(s.precio_base);
                }
            }
            None => v.push(SERVICIO_INEXISTENTE),
        },
    }
    // an explicit zero survives when no service price replaced it
    let precio_final = precio_final.or(input.precio_final);

    let inicio = match contrato::parse_fecha_inicio(input.fecha_inicio.as_deref()) {
        Ok(d) => {
            if let Err(e) = contrato::validate_not_past(d, today) {
                v.push(e.to_string());
            }
            am.fecha_inicio = Set(d);
            Some(d)
        }
        Err(e) => {
            v.push(e.to_string());
            None
        }
    };

    am.fecha_fin = Set(None);
    if let Some(raw) = non_blank(&input.fecha_fin) {
        match contrato::parse_fecha(FechaCampo::Fin, raw) {
            Ok(fin) => {
                if let Some(inicio) = inicio {
                    if let Err(e) = contrato::validate_rango(inicio, Some(fin)) {
                        v.push(e.to_string());
                    }
                }
                am.fecha_fin = Set(Some(fin));
            }
            Err(e) => v.push(e.to_string()),
        }
    }

    if let Some(p) = v.check(contrato::validate_precio_final(precio_final)) {
        am.precio_final = Set(p);
    }

    let estado = match input.estado.as_deref() {
        Some(raw) => v.check(Estado::parse(raw)),
        None => Some(Estado::default()),
    };
    if let Some(e) = estado {
        am.estado = Set(e);
    }

    v.finish()?;

    let created = am.insert(db).await?;
    info!(id = created.id, precio_final = created.precio_final, "contrato created");
    detail(db, created).await
}

/// Update the supplied fields of a contract; the first violation is returned.
///
/// The date ordering check uses the effective dates after the update, so an
/// end date earlier than the stored start date is rejected too.
#[instrument(skip(db, patch))]
pub async fn update_contrato(db: &DatabaseConnection, id: i32, patch: ContratoPatch) -> Result<ContratoDetail, ServiceError> {
    let found = contrato::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?;
    let mut am: contrato::ActiveModel = found.clone().into();

    if let Some(eid) = patch.empresa_id {
        if empresa::Entity::find_by_id(eid).one(db).await?.is_none() {
            return Err(ServiceError::Validation(EMPRESA_INEXISTENTE.into()));
        }
        am.empresa_id = Set(eid);
    }

    if let Some(sid) = patch.servicio_id {
        if servicio::Entity::find_by_id(sid).one(db).await?.is_none() {
            return Err(ServiceError::Validation(SERVICIO_INEXISTENTE.into()));
        }
        am.servicio_id = Set(sid);
    }

    let inicio = patch
        .fecha_inicio
        .as_deref()
        .map(|raw| contrato::parse_fecha(FechaCampo::Inicio, raw))
        .transpose()?;
    let fin = match patch.fecha_fin {
        Some(Some(raw)) if !raw.trim().is_empty() => Some(Some(contrato::parse_fecha(FechaCampo::Fin, &raw)?)),
        Some(_) => Some(None),
        None => None,
    };
    if inicio.is_some() || fin.is_some() {
        let effective_inicio = inicio.unwrap_or(found.fecha_inicio);
        let effective_fin = fin.unwrap_or(found.fecha_fin);
        contrato::validate_rango(effective_inicio, effective_fin).map_err(|e: DateError| {
            warn!(id, %effective_inicio, ?effective_fin, "contrato date range rejected");
            ServiceError::from(e)
        })?;
    }
    if let Some(d) = inicio { am.fecha_inicio = Set(d); }
    if let Some(f) = fin { am.fecha_fin = Set(f); }

    if let Some(p) = patch.precio_final { am.precio_final = Set(contrato::validate_precio_final(Some(p))?); }
    if let Some(raw) = patch.estado.as_deref() { am.estado = Set(Estado::parse(raw)?); }

    let updated = if am.is_changed() { am.update(db).await? } else { found };
    info!(id, "contrato updated");
    detail(db, updated).await
}

#[instrument(skip(db))]
pub async fn delete_contrato(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = contrato::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(NOT_FOUND));
    }
    info!(id, "contrato deleted");
    Ok(())
}
