use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid assistance level code: {0} (expected 1–7)")]
    InvalidAssistanceCode(u8),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
