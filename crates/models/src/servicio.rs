use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::require_text;
use crate::contrato;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "servicios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub descripcion: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub precio_base: f64,
    #[sea_orm(column_type = "Double")]
    pub duracion_horas: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contrato,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Contrato => Entity::has_many(contrato::Entity).into() }
    }
}

impl Related<contrato::Entity> for Entity {
    fn to() -> RelationDef { Relation::Contrato.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_nombre(nombre: Option<&str>) -> Result<String, ModelError> {
    require_text(nombre, "El nombre es requerido")
}

pub fn validate_precio_base(precio: Option<f64>) -> Result<f64, ModelError> {
    match precio {
        None => Err(ModelError::validation("El precio base es requerido")),
        Some(p) if p < 0.0 || p.is_nan() => Err(ModelError::validation("El precio base debe ser mayor o igual a 0")),
        Some(p) => Ok(p),
    }
}

pub fn validate_duracion_horas(duracion: Option<f64>) -> Result<f64, ModelError> {
    match duracion {
        None => Err(ModelError::validation("La duración en horas es requerida")),
        Some(d) if d > 0.0 => Ok(d),
        Some(_) => Err(ModelError::validation("La duración debe ser mayor a 0")),
    }
}
