use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }

    /// Message without the kind prefix, as returned to API clients.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Db(m) => m,
        }
    }
}
