//! Car Store
//!
//! CRUD access to the cars table. The store is stateless: every call goes
//! to SQLite, and the UI re-reads the full list after each mutation.

use rusqlite::{OptionalExtension, Row};

use garage_storage::Database;

use crate::car::{Car, NewCar};
use crate::error::CarError;
use crate::Result;

#[derive(Clone)]
pub struct CarStore {
    db: Database,
}

fn car_from_row(row: &Row<'_>) -> rusqlite::Result<Car> {
    Ok(Car {
        id: row.get(0)?,
        brand: row.get(1)?,
        model: row.get(2)?,
        hp: row.get(3)?,
    })
}

impl CarStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a car and return the id generated for it.
    pub fn create(&self, car: &NewCar) -> Result<i64> {
        let (affected, id) = self.db.transaction(|conn| {
            let affected = conn.execute(
                "INSERT INTO cars (brand, model, hp) VALUES (?1, ?2, ?3)",
                rusqlite::params![car.brand, car.model, car.hp],
            )?;
            Ok((affected, conn.last_insert_rowid()))
        })?;

        if affected == 0 {
            return Err(CarError::Insert);
        }

        tracing::info!(id, brand = %car.brand, model = %car.model, "Registered car");

        Ok(id)
    }

    /// Update all fields of an existing car. Returns the affected row count
    /// (expected 1); a missing id is an error.
    pub fn update(&self, id: i64, car: &NewCar) -> Result<usize> {
        let affected = self.db.transaction(|conn| {
            let affected = conn.execute(
                "UPDATE cars SET brand = ?1, model = ?2, hp = ?3 WHERE id = ?4",
                rusqlite::params![car.brand, car.model, car.hp, id],
            )?;
            Ok(affected)
        })?;

        if affected == 0 {
            return Err(CarError::NotFound(id));
        }

        Ok(affected)
    }

    /// Look up a single car by id.
    pub fn find(&self, id: i64) -> Result<Car> {
        let car = self.db.with_connection(|conn| {
            let car = conn
                .query_row(
                    "SELECT id, brand, model, hp FROM cars WHERE id = ?1",
                    [id],
                    car_from_row,
                )
                .optional()?;
            Ok(car)
        })?;

        car.ok_or(CarError::NotFound(id))
    }

    /// Look up cars whose brand matches the given LIKE pattern. The pattern
    /// is bound verbatim, so `Ford` matches exactly and `F%` by prefix.
    ///
    /// An empty result set is an error, unlike [`CarStore::all`].
    pub fn find_by_brand(&self, brand: &str) -> Result<Vec<Car>> {
        let cars = self.db.with_connection(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, brand, model, hp FROM cars WHERE brand LIKE ?1")?;
            let cars = stmt
                .query_map([brand], car_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(cars)
        })?;

        if cars.is_empty() {
            return Err(CarError::BrandNotFound(brand.to_string()));
        }

        Ok(cars)
    }

    /// Every registered car. An empty table yields an empty list, never an
    /// error.
    pub fn all(&self) -> Result<Vec<Car>> {
        Ok(self.db.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT id, brand, model, hp FROM cars")?;
            let cars = stmt
                .query_map([], car_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(cars)
        })?)
    }

    /// Delete a car by id. Returns the deleted row count; 0 when nothing
    /// matched is a success, not an error.
    pub fn remove(&self, id: i64) -> Result<usize> {
        let deleted = self
            .db
            .transaction(|conn| Ok(conn.execute("DELETE FROM cars WHERE id = ?1", [id])?))?;

        if deleted > 0 {
            tracing::info!(id, "Removed car");
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> CarStore {
        CarStore::new(Database::open_in_memory().unwrap())
    }

    fn car(brand: &str, model: &str, hp: i64) -> NewCar {
        NewCar {
            brand: brand.to_string(),
            model: model.to_string(),
            hp,
        }
    }

    #[test]
    fn test_create_and_find() {
        let store = test_store();

        let id = store.create(&car("Ford", "Focus", 150)).unwrap();
        let found = store.find(id).unwrap();

        assert_eq!(found.id, id);
        assert_eq!(found.brand, "Ford");
        assert_eq!(found.model, "Focus");
        assert_eq!(found.hp, 150);
    }

    #[test]
    fn test_update_changes_all_fields() {
        let store = test_store();

        let id = store.create(&car("Ford", "Focus", 150)).unwrap();
        let affected = store.update(id, &car("Ford", "Focus ST", 280)).unwrap();
        assert_eq!(affected, 1);

        let found = store.find(id).unwrap();
        assert_eq!(found.model, "Focus ST");
        assert_eq!(found.hp, 280);
    }

    #[test]
    fn test_update_missing_id_is_error() {
        let store = test_store();
        let result = store.update(42, &car("Ford", "Focus", 150));
        assert!(matches!(result, Err(CarError::NotFound(42))));
    }

    #[test]
    fn test_remove_missing_id_is_zero_not_error() {
        let store = test_store();
        assert_eq!(store.remove(42).unwrap(), 0);
    }

    #[test]
    fn test_all_on_empty_table_is_empty_list() {
        let store = test_store();
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn test_find_by_brand() {
        let store = test_store();

        store.create(&car("Toyota", "Corolla", 130)).unwrap();
        store.create(&car("Toyota", "Yaris", 100)).unwrap();
        store.create(&car("Honda", "Civic", 180)).unwrap();

        let toyotas = store.find_by_brand("Toyota").unwrap();
        assert_eq!(toyotas.len(), 2);
        assert!(toyotas.iter().all(|c| c.brand == "Toyota"));
    }

    #[test]
    fn test_find_by_brand_no_match_is_error() {
        let store = test_store();
        store.create(&car("Honda", "Civic", 180)).unwrap();

        let result = store.find_by_brand("Toyota");
        assert!(matches!(result, Err(CarError::BrandNotFound(_))));
    }

    #[test]
    fn test_find_by_brand_wildcard() {
        let store = test_store();

        store.create(&car("Toyota", "Corolla", 130)).unwrap();
        store.create(&car("Honda", "Civic", 180)).unwrap();

        let matches = store.find_by_brand("To%").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].brand, "Toyota");
    }

    #[test]
    fn test_car_lifecycle() {
        let store = test_store();

        let id = store.create(&car("Ford", "Focus", 150)).unwrap();

        let found = store.find(id).unwrap();
        assert_eq!(
            found,
            Car {
                id,
                brand: "Ford".to_string(),
                model: "Focus".to_string(),
                hp: 150,
            }
        );

        assert_eq!(store.remove(id).unwrap(), 1);
        assert!(matches!(store.find(id), Err(CarError::NotFound(_))));
    }

    #[test]
    fn test_ids_are_generated_in_sequence() {
        let store = test_store();

        let first = store.create(&car("Ford", "Focus", 150)).unwrap();
        let second = store.create(&car("Ford", "Fiesta", 100)).unwrap();
        assert!(second > first);
    }
}
