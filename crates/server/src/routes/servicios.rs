use axum::{extract::{rejection::{JsonRejection, PathRejection}, Path, State}, http::StatusCode, Json};
use common::types::MessageBody;
use service::servicio_service::{self, NewServicio, ServicioPatch};
use tracing::info;

use models::servicio;
use crate::{errors::JsonApiError, routes::AppState};

#[utoipa::path(
    get, path = "/api/servicios", tag = "servicios",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ServicioDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<servicio::Model>>, JsonApiError> {
    let list = servicio_service::list_servicios(&state.db).await?;
    info!(count = list.len(), "list servicios");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/servicios/{id}", tag = "servicios",
    params(("id" = i32, Path, description = "Servicio ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServicioDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<servicio::Model>, JsonApiError> {
    let Path(id) = path?;
    servicio_service::get_servicio(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::new(StatusCode::NOT_FOUND, "Servicio no encontrado"))
}

#[utoipa::path(
    post, path = "/api/servicios", tag = "servicios",
    request_body = crate::openapi::NewServicioDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServicioDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewServicio>, JsonRejection>,
) -> Result<(StatusCode, Json<servicio::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = servicio_service::create_servicio(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/servicios/{id}", tag = "servicios",
    params(("id" = i32, Path, description = "Servicio ID")),
    request_body = crate::openapi::NewServicioDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServicioDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ServicioPatch>, JsonRejection>,
) -> Result<Json<servicio::Model>, JsonApiError> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    Ok(Json(servicio_service::update_servicio(&state.db, id, patch).await?))
}

#[utoipa::path(
    delete, path = "/api/servicios/{id}", tag = "servicios",
    params(("id" = i32, Path, description = "Servicio ID")),
    responses(
        (status = 200, description = "Deleted, with its contratos", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<MessageBody>, JsonApiError> {
    let Path(id) = path?;
    servicio_service::delete_servicio(&state.db, id).await?;
    Ok(Json(MessageBody::new("Servicio eliminado correctamente")))
}
