use std::io;

use thiserror::Error;

use crate::profiles::{LoadError, NotFound};
use crate::template::RenderError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("error loading file: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    NotFound(#[from] NotFound),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
