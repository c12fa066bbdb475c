use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::require_text;
use crate::contrato;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "empresas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    pub email: String,
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

pub fn validate_direccion(direccion: Option<&str>) -> Result<String, ModelError> {
    require_text(direccion, "La dirección es requerida")
}

pub fn validate_telefono(telefono: Option<&str>) -> Result<String, ModelError> {
    require_text(telefono, "El teléfono es requerido")
}

/// Required, and must contain an `@`.
pub fn validate_email(email: Option<&str>) -> Result<String, ModelError> {
    let email = require_text(email, "El email es requerido")?;
    if !email.contains('@') {
        return Err(ModelError::validation("El email debe ser válido"));
    }
    Ok(email)
}
