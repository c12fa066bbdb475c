use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use tracing::{error, warn};

/// Error response rendered as `{"error": "..."}` with the given status.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            return Self::new(StatusCode::BAD_REQUEST, e.message());
        }
        match e {
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            other => {
                error!(err = %other, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, other.message())
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rej: JsonRejection) -> Self {
        warn!(reason = %rej.body_text(), "rejected request body");
        Self::new(StatusCode::BAD_REQUEST, rej.body_text())
    }
}

/// An id that does not parse as an integer addresses no resource.
impl From<PathRejection> for JsonApiError {
    fn from(rej: PathRejection) -> Self {
        warn!(reason = %rej.body_text(), "rejected path parameter");
        Self::new(StatusCode::NOT_FOUND, rej.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn service_errors_map_to_statuses() {
        let v: JsonApiError = ServiceError::Validation("El nombre es requerido".into()).into();
        assert_eq!(v.status, StatusCode::BAD_REQUEST);
        assert_eq!(v.message, "El nombre es requerido");

        let m: JsonApiError = ServiceError::from(ModelError::validation("El email debe ser válido")).into();
        assert_eq!(m.status, StatusCode::BAD_REQUEST);

        let n: JsonApiError = ServiceError::not_found("Empresa no encontrada").into();
        assert_eq!(n.status, StatusCode::NOT_FOUND);
        assert_eq!(n.message, "Empresa no encontrada");

        let d: JsonApiError = ServiceError::Db("disk I/O error".into()).into();
        assert_eq!(d.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
