use axum::{extract::{rejection::{JsonRejection, PathRejection}, Path, State}, http::StatusCode, Json};
use common::types::MessageBody;
use service::empresa_service::{self, EmpresaPatch, NewEmpresa};
use tracing::info;

use models::empresa;
use crate::{errors::JsonApiError, routes::AppState};

#[utoipa::path(
    get, path = "/api/empresas", tag = "empresas",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::EmpresaDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<empresa::Model>>, JsonApiError> {
    let list = empresa_service::list_empresas(&state.db).await?;
    info!(count = list.len(), "list empresas");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/empresas/{id}", tag = "empresas",
    params(("id" = i32, Path, description = "Empresa ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmpresaDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<empresa::Model>, JsonApiError> {
    let Path(id) = path?;
    empresa_service::get_empresa(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::new(StatusCode::NOT_FOUND, "Empresa no encontrada"))
}

#[utoipa::path(
    post, path = "/api/empresas", tag = "empresas",
    request_body = crate::openapi::NewEmpresaDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmpresaDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewEmpresa>, JsonRejection>,
) -> Result<(StatusCode, Json<empresa::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = empresa_service::create_empresa(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/empresas/{id}", tag = "empresas",
    params(("id" = i32, Path, description = "Empresa ID")),
    request_body = crate::openapi::NewEmpresaDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmpresaDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<EmpresaPatch>, JsonRejection>,
) -> Result<Json<empresa::Model>, JsonApiError> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    Ok(Json(empresa_service::update_empresa(&state.db, id, patch).await?))
}

#[utoipa::path(
    delete, path = "/api/empresas/{id}", tag = "empresas",
    params(("id" = i32, Path, description = "Empresa ID")),
    responses(
        (status = 200, description = "Deleted, with its contratos", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<MessageBody>, JsonApiError> {
    let Path(id) = path?;
    empresa_service::delete_empresa(&state.db, id).await?;
    Ok(Json(MessageBody::new("Empresa eliminada correctamente")))
}
