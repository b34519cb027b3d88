//! Application state management
use garage_core::{Config, Garage, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe application state wrapper
pub struct AppState {
    garage: Arc<RwLock<Option<Garage>>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = Config::default();
        let garage = Garage::new(config)?;

        Ok(Self {
            garage: Arc::new(RwLock::new(Some(garage))),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        if let Some(garage) = self.garage.write().as_ref() {
            garage.initialize()?;
        }
        Ok(())
    }

    pub fn with_garage<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Garage) -> Result<T>,
    {
        let guard = self.garage.read();
        match guard.as_ref() {
            Some(garage) => f(garage),
            None => Err(garage_core::CoreError::NotInitialized),
        }
    }
}
