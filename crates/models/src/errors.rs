use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("connection error: {0}")]
    Connect(String),
    #[error("schema error: {0}")]
    Schema(String),
}
