use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourseError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Persist: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("no complete record at position {position}")]
    OutOfRange { position: usize },

    #[error("record at position {position} has code {found}, expected {expected}")]
    CodeMismatch {
        position: usize,
        expected: i32,
        found: i32,
    },

    #[error("invalid thresholds: low ({low}) must be below high ({high})")]
    InvalidThresholds { low: f64, high: f64 },
}

pub type Result<T> = std::result::Result<T, CourseError>;
