// Storage error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not reach the ledger file: {0}")]
    Io(#[from] std::io::Error),

    #[error("The ledger file is damaged at line {line}: '{content}'")]
    Corrupt { line: usize, content: String },
}

pub type Result<T> = std::result::Result<T, StorageError>;
