use std::fmt;

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::ModelError;
use crate::{empresa, servicio};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum Estado {
    #[default]
    #[sea_orm(string_value = "activo")]
    Activo,
    #[sea_orm(string_value = "finalizado")]
    Finalizado,
    #[sea_orm(string_value = "cancelado")]
    Cancelado,
}

impl Estado {
    pub fn as_str(&self) -> &'static str {
        match self {
            Estado::Activo => "activo",
            Estado::Finalizado => "finalizado",
            Estado::Cancelado => "cancelado",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ModelError> {
        match s.trim() {
            "activo" => Ok(Estado::Activo),
            "finalizado" => Ok(Estado::Finalizado),
            "cancelado" => Ok(Estado::Cancelado),
            _ => Err(ModelError::validation("El estado debe ser activo, finalizado o cancelado")),
        }
    }
}

impl fmt::Display for Estado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contratos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub empresa_id: i32,
    pub servicio_id: i32,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: Option<NaiveDate>,
    pub estado: Estado,
    #[sea_orm(column_type = "Double")]
    pub precio_final: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Empresa,
    Servicio,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Empresa => Entity::belongs_to(empresa::Entity)
                .from(Column::EmpresaId)
                .to(empresa::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Servicio => Entity::belongs_to(servicio::Entity)
                .from(Column::ServicioId)
                .to(servicio::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<empresa::Entity> for Entity {
    fn to() -> RelationDef { Relation::Empresa.def() }
}

impl Related<servicio::Entity> for Entity {
    fn to() -> RelationDef { Relation::Servicio.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Contract with its parties embedded, the shape served by the API.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContratoDetail {
    #[serde(flatten)]
    pub contrato: Model,
    pub empresa: Option<empresa::Model>,
    pub servicio: Option<servicio::Model>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FechaCampo {
    Inicio,
    Fin,
}

impl fmt::Display for FechaCampo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FechaCampo::Inicio => f.write_str("La fecha de inicio"),
            FechaCampo::Fin => f.write_str("La fecha de fin"),
        }
    }
}

/// Date failures kept apart by kind: a bad format is never reported as an ordering problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("{0} es requerida")]
    Missing(FechaCampo),
    #[error("{0} debe tener formato YYYY-MM-DD")]
    Format(FechaCampo),
    #[error("La fecha de inicio no puede ser anterior a hoy")]
    StartInPast,
    #[error("La fecha de fin debe ser posterior a la fecha de inicio")]
    EndBeforeStart,
}

impl From<DateError> for ModelError {
    fn from(e: DateError) -> Self { ModelError::Validation(e.to_string()) }
}

pub fn parse_fecha(campo: FechaCampo, raw: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| DateError::Format(campo))
}

/// Required start date: present and well formed.
pub fn parse_fecha_inicio(raw: Option<&str>) -> Result<NaiveDate, DateError> {
    let raw = raw.filter(|s| !s.trim().is_empty()).ok_or(DateError::Missing(FechaCampo::Inicio))?;
    parse_fecha(FechaCampo::Inicio, raw)
}

/// A new contract cannot start before `today`.
pub fn validate_not_past(inicio: NaiveDate, today: NaiveDate) -> Result<(), DateError> {
    if inicio < today {
        return Err(DateError::StartInPast);
    }
    Ok(())
}

/// Equal dates are allowed.
pub fn validate_rango(inicio: NaiveDate, fin: Option<NaiveDate>) -> Result<(), DateError> {
    match fin {
        Some(fin) if fin < inicio => Err(DateError::EndBeforeStart),
        _ => Ok(()),
    }
}

pub fn validate_precio_final(precio: Option<f64>) -> Result<f64, ModelError> {
    match precio {
        None => Err(ModelError::validation("El precio final es requerido")),
        Some(p) if p < 0.0 || p.is_nan() => Err(ModelError::validation("El precio final debe ser mayor o igual a 0")),
        Some(p) => Ok(p),
    }
}
