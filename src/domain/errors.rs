use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type MediaResult<T> = Result<T, MediaError>;
