use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("unknown instance: {0}")]
    MissingInstance(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
