use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed catalog record at line {line}: {reason}")]
    MalformedCatalogRecord { line: usize, reason: String },

    #[error("Vector shape mismatch: expected {expected} dimensions, got {actual}")]
    VectorShapeMismatch { expected: usize, actual: usize },

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
