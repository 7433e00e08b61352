use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid item id: {0}")]
    InvalidItemId(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
