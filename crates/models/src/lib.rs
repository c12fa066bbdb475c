pub mod errors;
pub mod validation;
pub mod db;
pub mod empresa;
pub mod servicio;
pub mod contrato;
