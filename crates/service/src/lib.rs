//! Service layer providing business-oriented CRUD operations on top of models.
//! - One module per entity, free functions taking the shared connection.
//! - Field validators live in `models`; cross-entity rules live here.
//! - Create reports every violation at once, update stops at the first.

pub mod errors;
pub mod input;
pub mod empresa_service;
pub mod servicio_service;
pub mod contrato_service;
#[cfg(test)]
pub mod test_support;
