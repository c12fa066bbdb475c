use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Banner returned by `GET /`.
#[derive(Serialize, Debug)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
}

impl ApiInfo {
    pub fn current() -> Self {
        Self { message: "API de Servicios de Limpieza para Empresas", version: "1.0" }
    }
}

/// `{"error": "..."}` envelope shared by every failing response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self { Self { error: msg.into() } }
}

/// `{"message": "..."}` confirmation returned by deletes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(msg: impl Into<String>) -> Self { Self { message: msg.into() } }
}
