use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct EmpresaDoc {
    pub id: i32,
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    pub email: String,
}

#[derive(ToSchema)]
pub struct NewEmpresaDoc {
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

#[derive(ToSchema)]
pub struct ServicioDoc {
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio_base: f64,
    pub duracion_horas: f64,
}

#[derive(ToSchema)]
pub struct NewServicioDoc {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio_base: Option<f64>,
    pub duracion_horas: Option<f64>,
}

#[derive(ToSchema)]
pub struct ContratoDoc {
    pub id: i32,
    pub empresa_id: i32,
    pub servicio_id: i32,
    /// YYYY-MM-DD
    pub fecha_inicio: String,
    /// YYYY-MM-DD or null
    pub fecha_fin: Option<String>,
    /// activo | finalizado | cancelado
    pub estado: String,
    pub precio_final: f64,
    pub empresa: Option<EmpresaDoc>,
    pub servicio: Option<ServicioDoc>,
}

#[derive(ToSchema)]
pub struct NewContratoDoc {
    pub empresa_id: Option<i32>,
    pub servicio_id: Option<i32>,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub estado: Option<String>,
    pub precio_final: Option<f64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::empresas::list,
        crate::routes::empresas::get,
        crate::routes::empresas::create,
        crate::routes::empresas::update,
        crate::routes::empresas::delete,
        crate::routes::servicios::list,
        crate::routes::servicios::get,
        crate::routes::servicios::create,
        crate::routes::servicios::update,
        crate::routes::servicios::delete,
        crate::routes::contratos::list,
        crate::routes::contratos::get,
        crate::routes::contratos::create,
        crate::routes::contratos::update,
        crate::routes::contratos::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            MessageDoc,
            EmpresaDoc,
            NewEmpresaDoc,
            ServicioDoc,
            NewServicioDoc,
            ContratoDoc,
            NewContratoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "empresas"),
        (name = "servicios"),
        (name = "contratos")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_entity_route() {
        let doc = ApiDoc::openapi();
        for path in ["/api/empresas", "/api/empresas/{id}", "/api/servicios", "/api/servicios/{id}", "/api/contratos", "/api/contratos/{id}", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
