//! Main garage state container

use std::path::PathBuf;

use garage_cars::{Car, CarStore, NewCar};
use garage_storage::Database;

use crate::config::Config;
use crate::Result;

/// Main garage instance
///
/// Central state container for the application. The database handle and the
/// car store are constructed here and nowhere else; every caller receives
/// them through this type.
pub struct Garage {
    /// Configuration
    config: Config,
    /// Car store
    cars: CarStore,
}

impl Garage {
    /// Open the database at the configured path and wire up the store.
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let cars = CarStore::new(db);

        Ok(Self { config, cars })
    }

    /// In-memory instance, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        let cars = CarStore::new(db);

        Ok(Self {
            config: Config {
                database_path: PathBuf::from(":memory:"),
            },
            cars,
        })
    }

    /// Log startup state once the database is open.
    pub fn initialize(&self) -> Result<()> {
        let car_count = self.cars.all()?.len();

        tracing::info!(
            db = %self.config.database_path.display(),
            car_count,
            "Garage initialized"
        );

        Ok(())
    }

    pub fn cars(&self) -> &CarStore {
        &self.cars
    }

    // === Car operations ===

    pub fn create_car(&self, car: &NewCar) -> Result<i64> {
        Ok(self.cars.create(car)?)
    }

    pub fn update_car(&self, id: i64, car: &NewCar) -> Result<usize> {
        Ok(self.cars.update(id, car)?)
    }

    pub fn find_car(&self, id: i64) -> Result<Car> {
        Ok(self.cars.find(id)?)
    }

    pub fn find_cars_by_brand(&self, brand: &str) -> Result<Vec<Car>> {
        Ok(self.cars.find_by_brand(brand)?)
    }

    pub fn list_cars(&self) -> Result<Vec<Car>> {
        Ok(self.cars.all()?)
    }

    pub fn remove_car(&self, id: i64) -> Result<usize> {
        Ok(self.cars.remove(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garage_crud_passthrough() {
        let garage = Garage::open_in_memory().unwrap();
        garage.initialize().unwrap();

        let id = garage
            .create_car(&NewCar {
                brand: "Ford".to_string(),
                model: "Focus".to_string(),
                hp: 150,
            })
            .unwrap();

        let listed = garage.list_cars().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);

        assert_eq!(garage.remove_car(id).unwrap(), 1);
        assert!(garage.list_cars().unwrap().is_empty());
    }
}
