use thiserror::Error;

pub type Result<T> = std::result::Result<T, VigError>;

#[derive(Debug, Error)]
pub enum VigError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("input closed before an accuracy was entered")]
    Cancelled,

    #[error("format error: {0}")]
    Format(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
