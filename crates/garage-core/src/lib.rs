//! Garage Core
//!
//! Central coordination layer for the Garage app. Rust owns all state; the
//! WebView only renders it.

mod config;
mod error;
mod garage;

pub use config::Config;
pub use error::CoreError;
pub use garage::Garage;

// Re-export core components
pub use garage_cars::{Car, CarError, CarStore, NewCar};
pub use garage_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
