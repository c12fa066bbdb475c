use axum::{extract::{rejection::{JsonRejection, PathRejection}, Path, State}, http::StatusCode, Json};
use common::types::MessageBody;
use service::contrato_service::{self, ContratoPatch, NewContrato};
use tracing::info;

use models::contrato::ContratoDetail;
use crate::{errors::JsonApiError, routes::AppState};

#[utoipa::path(
    get, path = "/api/contratos", tag = "contratos",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ContratoDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContratoDetail>>, JsonApiError> {
    let list = contrato_service::list_contratos(&state.db).await?;
    info!(count = list.len(), "list contratos");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/contratos/{id}", tag = "contratos",
    params(("id" = i32, Path, description = "Contrato ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContratoDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<ContratoDetail>, JsonApiError> {
    let Path(id) = path?;
    contrato_service::get_contrato(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::new(StatusCode::NOT_FOUND, "Contrato no encontrado"))
}

#[utoipa::path(
    post, path = "/api/contratos", tag = "contratos",
    request_body = crate::openapi::NewContratoDoc,
    responses(
        (status = 201, description = "Created; precio_final defaults to the servicio's precio_base", body = crate::openapi::ContratoDoc),
        (status = 400, description = "Validation Error, all violations joined with '; '", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewContrato>, JsonRejection>,
) -> Result<(StatusCode, Json<ContratoDetail>), JsonApiError> {
    let Json(input) = payload?;
    let created = contrato_service::create_contrato(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/contratos/{id}", tag = "contratos",
    params(("id" = i32, Path, description = "Contrato ID")),
    request_body = crate::openapi::NewContratoDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ContratoDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ContratoPatch>, JsonRejection>,
) -> Result<Json<ContratoDetail>, JsonApiError> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    Ok(Json(contrato_service::update_contrato(&state.db, id, patch).await?))
}

#[utoipa::path(
    delete, path = "/api/contratos/{id}", tag = "contratos",
    params(("id" = i32, Path, description = "Contrato ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<MessageBody>, JsonApiError> {
    let Path(id) = path?;
    contrato_service::delete_contrato(&state.db, id).await?;
    Ok(Json(MessageBody::new("Contrato eliminado correctamente")))
}
