use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    #[error("instance JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
