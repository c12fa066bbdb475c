use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{ApiInfo, Health};

use crate::openapi::ApiDoc;

pub mod contratos;
pub mod empresas;
pub mod servicios;

/// Shared handler state; the connection is a pool and cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn index() -> Json<ApiInfo> {
    Json(ApiInfo::current())
}

/// Build the full application router: entity CRUD, health, and API docs
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/empresas", get(empresas::list).post(empresas::create))
        .route("/api/empresas/:id", get(empresas::get).put(empresas::update).delete(empresas::delete))
        .route("/api/servicios", get(servicios::list).post(servicios::create))
        .route("/api/servicios/:id", get(servicios::get).put(servicios::update).delete(servicios::delete))
        .route("/api/contratos", get(contratos::list).post(contratos::create))
        .route("/api/contratos/:id", get(contratos::get).put(contratos::update).delete(contratos::delete));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
