//! Car store error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarError {
    #[error("Car not found: id={0}")]
    NotFound(i64),

    #[error("No cars matching brand: {0}")]
    BrandNotFound(String),

    #[error("Insert affected no rows")]
    Insert,

    #[error("Storage error: {0}")]
    Storage(#[from] garage_storage::StorageError),
}
