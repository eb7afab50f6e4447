use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocboothError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Task error: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Launch error: {0}")]
    Launch(String),
}

impl From<rusqlite::Error> for DocboothError {
    fn from(error: rusqlite::Error) -> Self {
        DocboothError::Store(error.to_string())
    }
}

impl From<&str> for DocboothError {
    fn from(error: &str) -> Self {
        DocboothError::Launch(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DocboothError>;
