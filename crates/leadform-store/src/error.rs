use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("catalog file not found: {0}")]
    MissingCatalog(PathBuf),
    #[error("catalog {path} is missing column \"{column}\"")]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid backup path (matches ledger): {0}")]
    InvalidBackupPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Csv,
    MissingHomeDir,
    InvalidDataPath,
    MissingCatalog,
    MissingColumn,
    NotFound,
    InvalidBackupPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Csv(_) => StoreErrorKind::Csv,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::MissingCatalog(_) => StoreErrorKind::MissingCatalog,
            StoreError::MissingColumn { .. } => StoreErrorKind::MissingColumn,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::InvalidBackupPath(_) => StoreErrorKind::InvalidBackupPath,
        }
    }
}
