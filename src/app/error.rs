use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Tree parsing error: {0}")]
    Parse(#[from] crate::tree::ParseError),
    #[error("Tree flattening error: {0}")]
    Flatten(#[from] crate::path::FlattenError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("General error: {0}")]
    General(String),
}
