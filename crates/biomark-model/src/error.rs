use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown lab provider: {0}")]
    UnknownProvider(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
