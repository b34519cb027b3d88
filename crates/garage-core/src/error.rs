//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] garage_storage::StorageError),

    #[error("Car error: {0}")]
    Car(#[from] garage_cars::CarError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Garage not initialized")]
    NotInitialized,
}
